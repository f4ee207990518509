use myo_common::Address;
use serde::{Deserialize, Serialize};

use crate::core::ledger::Amount;

/// Notification record appended by every successful balance-changing
/// operation, in emission order.
///
/// Mint and burn reuse the transfer shape with [`Address::ZERO`] standing
/// in for the created-from / destroyed-to endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: Amount,
}

impl TransferEvent {
    pub fn new(from: Address, to: Address, amount: Amount) -> Self {
        Self { from, to, amount }
    }

    /// The record describes minted supply: its source is the sentinel.
    pub fn is_mint(&self) -> bool {
        self.from.is_zero()
    }

    /// The record describes burned supply: its destination is the sentinel.
    pub fn is_burn(&self) -> bool {
        self.to.is_zero()
    }
}
