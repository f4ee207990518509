//! myo-common
//!
//! Identity primitives shared across the MYO workspace: the account
//! address type, its parsing errors, and key-derived address helpers.

pub mod address;

pub use address::address::{Address, ADDRESS_LEN};
pub use address::errors::AddressError;
