//! myo-ledger
//!
//! Fungible-token ledger with layered access control. Governors manage the
//! role sets, minters create and destroy supply, and every balance change
//! preserves conservation (total supply equals the sum of all balances)
//! while appending a transfer notification for external observers.

pub mod core;
pub mod error;

pub use crate::core::access::{AccessRegistry, Role};
pub use crate::core::ledger::event::TransferEvent;
pub use crate::core::ledger::metadata::{TokenMetadata, TOKEN_DECIMALS};
pub use crate::core::ledger::shared::SharedLedger;
pub use crate::core::ledger::snapshot::LedgerSnapshot;
pub use crate::core::ledger::{Amount, Ledger};
pub use crate::error::TokenError;
