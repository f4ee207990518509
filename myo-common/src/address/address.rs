use ed25519_dalek::VerifyingKey;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::errors::AddressError;

/// Raw byte length of an account address.
pub const ADDRESS_LEN: usize = 20;

/// An account address: 20 raw bytes, rendered as `0x`-prefixed lowercase hex.
///
/// Addresses are opaque identities — two addresses are the same account
/// exactly when their bytes are equal. [`Address::ZERO`] is reserved as the
/// mint/burn sentinel and never holds a balance.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; ADDRESS_LEN]);

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let raw = s
            .strip_prefix("0x")
            .ok_or_else(|| AddressError::MissingPrefix(s.to_string()))?;
        let bytes = hex::decode(raw)?;
        if bytes.len() != ADDRESS_LEN {
            return Err(AddressError::InvalidLength(bytes.len()));
        }
        let mut buf = [0u8; ADDRESS_LEN];
        buf.copy_from_slice(&bytes);
        Ok(Address(buf))
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Address::try_from(s.as_str())
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::try_from(s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> String {
        address.to_string()
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl Address {
    /// The zero address. Reserved as the sentinel endpoint of mint and burn
    /// notifications; rejected as a real party everywhere else.
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        *self == Address::ZERO
    }

    /// Returns whether the given string parses as an address.
    pub fn is_valid(address: &str) -> bool {
        Address::try_from(address).is_ok()
    }

    /// Derives the address owned by an Ed25519 verifying key.
    ///
    /// The address is the trailing [`ADDRESS_LEN`] bytes of the SHA-256
    /// digest of the raw key, so distinct keys map to distinct addresses
    /// and the derivation is stable across processes.
    pub fn from_public_key(public_key: &VerifyingKey) -> Address {
        let digest = Sha256::digest(public_key.as_bytes());
        let mut buf = [0u8; ADDRESS_LEN];
        buf.copy_from_slice(&digest[digest.len() - ADDRESS_LEN..]);
        Address(buf)
    }
}
