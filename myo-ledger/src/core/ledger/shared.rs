use std::sync::{Arc, RwLock};

use myo_common::Address;

use crate::core::ledger::event::TransferEvent;
use crate::core::ledger::metadata::TokenMetadata;
use crate::core::ledger::snapshot::LedgerSnapshot;
use crate::core::ledger::{Amount, Ledger};
use crate::error::TokenError;

/// Cloneable handle for hosts that call in from multiple threads.
///
/// One lock guards the whole instance — registry, balances, supply, and
/// event log — so every call stays the same single atomic transition the
/// plain [`Ledger`] gives a serialized host. Queries take the read lock,
/// mutations the write lock; there is no finer-grained locking to get
/// wrong.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    /// Deploys a fresh instance behind the lock. Same rules as
    /// [`Ledger::deploy`].
    pub fn deploy(metadata: TokenMetadata, deployer: Address) -> Result<Self, TokenError> {
        Ok(Self::from_ledger(Ledger::deploy(metadata, deployer)?))
    }

    /// Wraps an already-deployed instance.
    pub fn from_ledger(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    pub fn name(&self) -> String {
        self.inner.read().unwrap().name().to_string()
    }

    pub fn symbol(&self) -> String {
        self.inner.read().unwrap().symbol().to_string()
    }

    pub fn decimals(&self) -> u8 {
        self.inner.read().unwrap().decimals()
    }

    pub fn balance_of(&self, account: Address) -> Amount {
        self.inner.read().unwrap().balance_of(account)
    }

    pub fn total_supply(&self) -> Amount {
        self.inner.read().unwrap().total_supply()
    }

    pub fn is_governor(&self, account: Address) -> bool {
        self.inner.read().unwrap().is_governor(account)
    }

    pub fn is_minter(&self, account: Address) -> bool {
        self.inner.read().unwrap().is_minter(account)
    }

    pub fn events(&self) -> Vec<TransferEvent> {
        self.inner.read().unwrap().events().to_vec()
    }

    pub fn conservation_holds(&self) -> bool {
        self.inner.read().unwrap().conservation_holds()
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        self.inner.read().unwrap().snapshot()
    }

    pub fn mint(&self, caller: Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        self.inner.write().unwrap().mint(caller, to, amount)
    }

    pub fn burn(&self, caller: Address, from: Address, amount: Amount) -> Result<(), TokenError> {
        self.inner.write().unwrap().burn(caller, from, amount)
    }

    pub fn transfer(&self, caller: Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        self.inner.write().unwrap().transfer(caller, to, amount)
    }

    pub fn add_governor(&self, caller: Address, account: Address) -> Result<(), TokenError> {
        self.inner.write().unwrap().add_governor(caller, account)
    }

    pub fn remove_governor(&self, caller: Address, account: Address) -> Result<(), TokenError> {
        self.inner.write().unwrap().remove_governor(caller, account)
    }

    pub fn add_minter(&self, caller: Address, account: Address) -> Result<(), TokenError> {
        self.inner.write().unwrap().add_minter(caller, account)
    }

    pub fn remove_minter(&self, caller: Address, account: Address) -> Result<(), TokenError> {
        self.inner.write().unwrap().remove_minter(caller, account)
    }
}
