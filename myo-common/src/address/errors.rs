use thiserror::Error;

use super::address::ADDRESS_LEN;

/// Errors related specifically to address parsing and formatting.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The string form carries no `0x` prefix.
    #[error("address must be 0x-prefixed hex: {0}")]
    MissingPrefix(String),

    /// The characters after the prefix are not valid hexadecimal.
    #[error("invalid hex in address: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Decoded length is not the expected address width.
    #[error("invalid address length: expected {ADDRESS_LEN} bytes, got {0}")]
    InvalidLength(usize),
}
