use std::collections::BTreeMap;

use myo_common::Address;
use serde::{Deserialize, Serialize};

use crate::core::ledger::event::TransferEvent;
use crate::core::ledger::metadata::TokenMetadata;
use crate::core::ledger::Amount;

/// Serializable view of a whole instance, ordered deterministically so two
/// snapshots of the same state render to identical JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub metadata: TokenMetadata,
    pub total_supply: Amount,
    pub balances: BTreeMap<Address, Amount>,
    pub governors: Vec<Address>,
    pub minters: Vec<Address>,
    pub events: Vec<TransferEvent>,
}
