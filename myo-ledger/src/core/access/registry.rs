use std::collections::HashSet;

use myo_common::Address;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::TokenError;

/// The two privilege tiers guarding the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Governor,
    Minter,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Governor => write!(f, "governor"),
            Role::Minter => write!(f, "minter"),
        }
    }
}

/// In-memory registry of the role sets gating administrative and supply
/// operations.
///
/// Governors administer both sets; minters create and destroy supply. The
/// sets overlap freely: a governor mints only if also granted the minter
/// role, and a minter administers nothing unless also a governor. Keeping
/// the two rights apart lets issuance be granted or revoked without handing
/// out broader administrative power.
///
/// Typically owned by a [`Ledger`], which delegates its role-administration
/// surface here.
///
/// [`Ledger`]: crate::core::ledger::Ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRegistry {
    governors: HashSet<Address>,
    minters: HashSet<Address>,
}

impl AccessRegistry {
    /// Creates the registry for a freshly deployed ledger.
    ///
    /// The deployer starts as the sole governor and the sole minter, so the
    /// instance can mint and administer roles from its first call without
    /// any intermediate grant.
    pub fn new(deployer: Address) -> Self {
        let mut governors = HashSet::new();
        governors.insert(deployer);
        let mut minters = HashSet::new();
        minters.insert(deployer);
        Self { governors, minters }
    }

    /// Grants governor status to `account`.
    ///
    /// Idempotent: granting to an existing governor changes nothing and is
    /// not an error.
    ///
    /// # Errors
    /// Returns [`TokenError::Unauthorized`] if `caller` is not a governor.
    pub fn add_governor(&mut self, caller: Address, account: Address) -> Result<(), TokenError> {
        self.require_governor(caller)?;
        if self.governors.insert(account) {
            info!("🏛️ GOVERNOR GRANTED: {} by {}", account, caller);
        }
        Ok(())
    }

    /// Revokes governor status from `account`.
    ///
    /// Idempotent: revoking a non-governor changes nothing.
    ///
    /// # Errors
    /// - [`TokenError::Unauthorized`] if `caller` is not a governor.
    /// - [`TokenError::LastGovernor`] if `account` is the only governor —
    ///   the set must never empty, or no caller could ever administer the
    ///   registry again.
    pub fn remove_governor(&mut self, caller: Address, account: Address) -> Result<(), TokenError> {
        self.require_governor(caller)?;
        if self.governors.contains(&account) && self.governors.len() == 1 {
            return Err(TokenError::LastGovernor(account));
        }
        if self.governors.remove(&account) {
            info!("🏛️ GOVERNOR REVOKED: {} by {}", account, caller);
        }
        Ok(())
    }

    /// Grants minter status to `account`. Idempotent.
    ///
    /// # Errors
    /// Returns [`TokenError::Unauthorized`] if `caller` is not a governor —
    /// minter status alone does not confer the right to grant it.
    pub fn add_minter(&mut self, caller: Address, account: Address) -> Result<(), TokenError> {
        self.require_governor(caller)?;
        if self.minters.insert(account) {
            info!("💰 MINTER GRANTED: {} by {}", account, caller);
        }
        Ok(())
    }

    /// Revokes minter status from `account`. Idempotent; the minter set may
    /// legitimately end up empty.
    ///
    /// # Errors
    /// Returns [`TokenError::Unauthorized`] if `caller` is not a governor.
    pub fn remove_minter(&mut self, caller: Address, account: Address) -> Result<(), TokenError> {
        self.require_governor(caller)?;
        if self.minters.remove(&account) {
            info!("💰 MINTER REVOKED: {} by {}", account, caller);
        }
        Ok(())
    }

    /// Pure membership query; never fails.
    pub fn is_governor(&self, account: Address) -> bool {
        self.governors.contains(&account)
    }

    /// Pure membership query; never fails.
    pub fn is_minter(&self, account: Address) -> bool {
        self.minters.contains(&account)
    }

    /// Gate for administrative paths.
    pub(crate) fn require_governor(&self, caller: Address) -> Result<(), TokenError> {
        if self.is_governor(caller) {
            Ok(())
        } else {
            warn!("⚠️ UNAUTHORIZED: {} is not a governor", caller);
            Err(TokenError::Unauthorized {
                caller,
                required: Role::Governor,
            })
        }
    }

    /// Gate for supply paths (mint and burn).
    pub(crate) fn require_minter(&self, caller: Address) -> Result<(), TokenError> {
        if self.is_minter(caller) {
            Ok(())
        } else {
            warn!("⚠️ UNAUTHORIZED: {} is not a minter", caller);
            Err(TokenError::Unauthorized {
                caller,
                required: Role::Minter,
            })
        }
    }

    /// Governor set, sorted for stable output.
    pub fn governors(&self) -> Vec<Address> {
        let mut list: Vec<Address> = self.governors.iter().copied().collect();
        list.sort();
        list
    }

    /// Minter set, sorted for stable output.
    pub fn minters(&self) -> Vec<Address> {
        let mut list: Vec<Address> = self.minters.iter().copied().collect();
        list.sort();
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: u8) -> Address {
        Address::new([tag; 20])
    }

    #[test]
    fn test_deployer_holds_both_roles() {
        let deployer = addr(1);
        let registry = AccessRegistry::new(deployer);

        assert!(registry.is_governor(deployer));
        assert!(registry.is_minter(deployer));
        assert_eq!(registry.governors(), vec![deployer]);
        assert_eq!(registry.minters(), vec![deployer]);
    }

    #[test]
    fn test_minter_grant_and_revoke() {
        let deployer = addr(1);
        let minter = addr(2);
        let mut registry = AccessRegistry::new(deployer);

        registry.add_minter(deployer, minter).unwrap();
        assert!(registry.is_minter(minter));
        // Minter status carries no administrative rights.
        assert!(!registry.is_governor(minter));

        registry.remove_minter(deployer, minter).unwrap();
        assert!(!registry.is_minter(minter));
    }

    #[test]
    fn test_grants_are_idempotent() {
        let deployer = addr(1);
        let other = addr(2);
        let mut registry = AccessRegistry::new(deployer);

        registry.add_governor(deployer, other).unwrap();
        registry.add_governor(deployer, other).unwrap();
        assert_eq!(registry.governors().len(), 2);

        registry.add_minter(deployer, other).unwrap();
        registry.add_minter(deployer, other).unwrap();
        assert_eq!(registry.minters().len(), 2);

        registry.remove_minter(deployer, other).unwrap();
        registry.remove_minter(deployer, other).unwrap();
        assert!(!registry.is_minter(other));

        registry.remove_governor(deployer, other).unwrap();
        registry.remove_governor(deployer, other).unwrap();
        assert!(!registry.is_governor(other));
    }

    #[test]
    fn test_non_governor_cannot_administer() {
        let deployer = addr(1);
        let minter = addr(2);
        let stranger = addr(3);
        let mut registry = AccessRegistry::new(deployer);
        registry.add_minter(deployer, minter).unwrap();

        for caller in [minter, stranger] {
            let err = registry.add_minter(caller, stranger).unwrap_err();
            assert_eq!(
                err,
                TokenError::Unauthorized {
                    caller,
                    required: Role::Governor,
                }
            );
            assert!(err.to_string().contains("not a governor"));
        }

        assert!(registry.add_governor(stranger, stranger).is_err());
        assert!(registry.remove_governor(stranger, deployer).is_err());
        assert!(registry.remove_minter(minter, minter).is_err());

        // Nothing leaked through.
        assert_eq!(registry.governors(), vec![deployer]);
        assert!(!registry.is_minter(stranger));
        assert!(registry.is_minter(minter));
    }

    #[test]
    fn test_last_governor_cannot_be_removed() {
        let deployer = addr(1);
        let second = addr(2);
        let mut registry = AccessRegistry::new(deployer);

        let err = registry.remove_governor(deployer, deployer).unwrap_err();
        assert_eq!(err, TokenError::LastGovernor(deployer));
        assert!(registry.is_governor(deployer));

        // With a second governor in place, self-removal is fine.
        registry.add_governor(deployer, second).unwrap();
        registry.remove_governor(deployer, deployer).unwrap();
        assert!(!registry.is_governor(deployer));
        assert_eq!(registry.governors(), vec![second]);
    }
}
