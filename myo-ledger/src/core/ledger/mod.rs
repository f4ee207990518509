pub mod event;
pub mod metadata;
pub mod shared;
pub mod snapshot;
pub mod state;

use myo_common::Address;
use tracing::{info, warn};

use crate::core::access::AccessRegistry;
use crate::error::TokenError;

use event::TransferEvent;
use metadata::TokenMetadata;
use snapshot::LedgerSnapshot;
use state::LedgerState;

/// Base accounting unit. Fixed-width unsigned; every mutation goes through
/// overflow-checked arithmetic, never signed or floating-point.
pub type Amount = u128;

/// A deployed token instance: immutable metadata, the role registry gating
/// supply changes, the balance book, and the notification log.
///
/// Every public operation is a single atomic transition — all checks run
/// before any write, so a failed call leaves balances, roles, supply, and
/// the event log exactly as they were. The host serializes calls; for
/// multi-threaded hosts see [`shared::SharedLedger`].
#[derive(Debug, Clone)]
pub struct Ledger {
    metadata: TokenMetadata,
    registry: AccessRegistry,
    state: LedgerState,
    events: Vec<TransferEvent>,
}

impl Ledger {
    /// Deploys a fresh instance with `deployer` as sole governor and minter
    /// and an empty balance book.
    ///
    /// # Errors
    /// - [`TokenError::InvalidMetadata`] if the metadata fails validation.
    /// - [`TokenError::ZeroAddress`] if `deployer` is the zero sentinel.
    pub fn deploy(metadata: TokenMetadata, deployer: Address) -> Result<Self, TokenError> {
        metadata.validate()?;
        if deployer.is_zero() {
            return Err(TokenError::ZeroAddress);
        }

        info!(
            "🏛️ DEPLOY: {} ({}) by {}",
            metadata.name, metadata.symbol, deployer
        );
        Ok(Self {
            metadata,
            registry: AccessRegistry::new(deployer),
            state: LedgerState::new(),
            events: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// Stored balance or zero; pure, never fails.
    pub fn balance_of(&self, account: Address) -> Amount {
        self.state.balance_of(account)
    }

    pub fn total_supply(&self) -> Amount {
        self.state.total_supply()
    }

    pub fn is_governor(&self, account: Address) -> bool {
        self.registry.is_governor(account)
    }

    pub fn is_minter(&self, account: Address) -> bool {
        self.registry.is_minter(account)
    }

    pub fn registry(&self) -> &AccessRegistry {
        &self.registry
    }

    /// Notification log, in emission order. Every successful mint, burn,
    /// and transfer appends exactly one record; failed calls append none.
    pub fn events(&self) -> &[TransferEvent] {
        &self.events
    }

    /// Conservation check: total supply equals the sum of all balances.
    pub fn conservation_holds(&self) -> bool {
        self.state.conservation_holds()
    }

    /// Creates `amount` new units on `to`'s balance and grows the supply.
    /// Emits a notification from the zero sentinel to `to`.
    ///
    /// # Errors
    /// - [`TokenError::Unauthorized`] ("not a minter") if `caller` lacks
    ///   the minter role.
    /// - [`TokenError::ZeroAddress`] if `to` is the sentinel.
    /// - [`TokenError::ArithmeticOverflow`] if the supply or `to`'s balance
    ///   would pass the representable range.
    pub fn mint(&mut self, caller: Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        self.registry.require_minter(caller)?;
        if to.is_zero() {
            warn!("⚠️ MINT REJECTED: the zero address cannot receive funds");
            return Err(TokenError::ZeroAddress);
        }

        self.state.mint(to, amount).map_err(|e| {
            warn!("⚠️ MINT REJECTED: {}", e);
            e
        })?;
        self.events.push(TransferEvent::new(Address::ZERO, to, amount));
        info!(
            "💰 MINT: {} minted {} {} to {}",
            caller, amount, self.metadata.symbol, to
        );
        debug_assert!(self.state.conservation_holds());
        Ok(())
    }

    /// Destroys `amount` units from `from`'s balance and shrinks the
    /// supply. Admin convention: the minter names the account to burn from;
    /// the account itself has no say. Emits a notification from `from` to
    /// the zero sentinel.
    ///
    /// # Errors
    /// - [`TokenError::Unauthorized`] ("not a minter") if `caller` lacks
    ///   the minter role.
    /// - [`TokenError::ZeroAddress`] if `from` is the sentinel.
    /// - [`TokenError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    pub fn burn(&mut self, caller: Address, from: Address, amount: Amount) -> Result<(), TokenError> {
        self.registry.require_minter(caller)?;
        if from.is_zero() {
            return Err(TokenError::ZeroAddress);
        }

        self.state.burn(from, amount)?;
        self.events.push(TransferEvent::new(from, Address::ZERO, amount));
        info!(
            "🔥 BURN: {} burned {} {} from {}",
            caller, amount, self.metadata.symbol, from
        );
        debug_assert!(self.state.conservation_holds());
        Ok(())
    }

    /// Moves `amount` from the caller to `to`. Any holder may move its own
    /// funds — no role required, sufficient balance is the only gate.
    /// Self-transfers are legal and still emit their notification.
    ///
    /// # Errors
    /// - [`TokenError::ZeroAddress`] if either endpoint is the sentinel.
    /// - [`TokenError::InsufficientBalance`] if the caller holds less than
    ///   `amount`.
    pub fn transfer(&mut self, caller: Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        if caller.is_zero() || to.is_zero() {
            return Err(TokenError::ZeroAddress);
        }

        self.state.transfer(caller, to, amount)?;
        self.events.push(TransferEvent::new(caller, to, amount));
        info!(
            "🔄 TRANSFER: {} -> {} ({} {})",
            caller, to, amount, self.metadata.symbol
        );
        debug_assert!(self.state.conservation_holds());
        Ok(())
    }

    pub fn add_governor(&mut self, caller: Address, account: Address) -> Result<(), TokenError> {
        self.registry.add_governor(caller, account)
    }

    pub fn remove_governor(&mut self, caller: Address, account: Address) -> Result<(), TokenError> {
        self.registry.remove_governor(caller, account)
    }

    pub fn add_minter(&mut self, caller: Address, account: Address) -> Result<(), TokenError> {
        self.registry.add_minter(caller, account)
    }

    pub fn remove_minter(&mut self, caller: Address, account: Address) -> Result<(), TokenError> {
        self.registry.remove_minter(caller, account)
    }

    /// Deterministic serializable view of the whole instance.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            metadata: self.metadata.clone(),
            total_supply: self.state.total_supply(),
            balances: self.state.balances().iter().map(|(a, v)| (*a, *v)).collect(),
            governors: self.registry.governors(),
            minters: self.registry.minters(),
            events: self.events.clone(),
        }
    }
}
