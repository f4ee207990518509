use myo_common::Address;
use thiserror::Error;

use crate::core::access::Role;
use crate::core::ledger::Amount;

/// Failure surface of the token ledger and its access registry.
///
/// Every failure is synchronous and non-retryable: an operation either
/// applies completely or returns one of these and changes nothing — no
/// partial balances, no stray notifications.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The caller does not hold the role the operation requires.
    #[error("unauthorized: {caller} is not a {required}")]
    Unauthorized { caller: Address, required: Role },

    /// A debit larger than the account balance.
    #[error("insufficient balance in {account}: has {available}, needs {required}")]
    InsufficientBalance {
        account: Address,
        available: Amount,
        required: Amount,
    },

    /// A credit that would push a balance or the total supply past the
    /// representable range.
    #[error("arithmetic overflow: amount exceeds the representable supply")]
    ArithmeticOverflow,

    /// The zero address was named as a real party. It is reserved as the
    /// mint/burn notification sentinel and can never hold or move funds.
    #[error("the zero address cannot take part in this operation")]
    ZeroAddress,

    /// Removing this governor would leave the registry ungovernable.
    #[error("cannot remove the last governor {0}")]
    LastGovernor(Address),

    /// Token metadata rejected at deployment.
    #[error("invalid token metadata: {0}")]
    InvalidMetadata(String),
}
