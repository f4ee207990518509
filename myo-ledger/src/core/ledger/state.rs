use std::collections::HashMap;

use myo_common::Address;

use crate::core::ledger::Amount;
use crate::error::TokenError;

/// Balance book of a deployed instance: per-account balances plus the
/// running total supply.
///
/// Accounts appear implicitly on first credit and disappear when a debit
/// zeroes them out — absence and a zero balance are the same thing, and
/// `balance_of` answers zero for both. Every mutation here keeps the
/// conservation invariant: the total supply equals the sum over the book.
///
/// Authorization and notifications live one level up, in
/// [`Ledger`](crate::core::ledger::Ledger); this type only does the
/// checked arithmetic.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    balances: HashMap<Address, Amount>,
    total_supply: Amount,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored balance or zero; never fails.
    pub fn balance_of(&self, account: Address) -> Amount {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    pub fn balances(&self) -> &HashMap<Address, Amount> {
        &self.balances
    }

    /// Creates `amount` units on `account` and grows the supply to match.
    ///
    /// Both new values are computed before either is written, so a failed
    /// mint leaves no partial state.
    ///
    /// # Errors
    /// [`TokenError::ArithmeticOverflow`] if the supply or the balance
    /// would pass the representable range.
    pub fn mint(&mut self, account: Address, amount: Amount) -> Result<(), TokenError> {
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;
        let new_balance = self
            .balance_of(account)
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;

        self.total_supply = new_supply;
        self.set_balance(account, new_balance);
        Ok(())
    }

    /// Destroys `amount` units held by `account` and shrinks the supply.
    ///
    /// # Errors
    /// [`TokenError::InsufficientBalance`] if the account holds less than
    /// `amount`; nothing is written in that case.
    pub fn burn(&mut self, account: Address, amount: Amount) -> Result<(), TokenError> {
        let available = self.balance_of(account);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                account,
                available,
                required: amount,
            });
        }

        // Conservation gives amount <= available <= total_supply.
        self.total_supply -= amount;
        self.set_balance(account, available - amount);
        Ok(())
    }

    /// Moves `amount` from one account to another; the supply is untouched.
    ///
    /// A self-transfer short-circuits after the balance check: the book is
    /// already in its post state.
    ///
    /// # Errors
    /// [`TokenError::InsufficientBalance`] if `from` holds less than
    /// `amount`.
    pub fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                account: from,
                available,
                required: amount,
            });
        }
        if from == to {
            return Ok(());
        }

        let new_to = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;

        self.set_balance(from, available - amount);
        self.set_balance(to, new_to);
        Ok(())
    }

    /// Conservation check: the running total equals the sum over the book.
    pub fn conservation_holds(&self) -> bool {
        let mut sum: Amount = 0;
        for amount in self.balances.values() {
            sum = match sum.checked_add(*amount) {
                Some(s) => s,
                None => return false,
            };
        }
        sum == self.total_supply
    }

    fn set_balance(&mut self, account: Address, value: Amount) {
        if value == 0 {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: u8) -> Address {
        Address::new([tag; 20])
    }

    #[test]
    fn test_mint_grows_balance_and_supply() {
        let mut state = LedgerState::new();
        state.mint(addr(1), 1_000).unwrap();
        state.mint(addr(2), 250).unwrap();

        assert_eq!(state.balance_of(addr(1)), 1_000);
        assert_eq!(state.balance_of(addr(2)), 250);
        assert_eq!(state.total_supply(), 1_250);
        assert!(state.conservation_holds());
    }

    #[test]
    fn test_mint_overflow_is_rejected_without_partial_state() {
        let mut state = LedgerState::new();
        state.mint(addr(1), Amount::MAX).unwrap();

        let err = state.mint(addr(2), 1).unwrap_err();
        assert_eq!(err, TokenError::ArithmeticOverflow);
        assert_eq!(state.total_supply(), Amount::MAX);
        assert_eq!(state.balance_of(addr(2)), 0);
        assert!(state.conservation_holds());
    }

    #[test]
    fn test_burn_checks_funds_first() {
        let mut state = LedgerState::new();
        state.mint(addr(1), 100).unwrap();

        let err = state.burn(addr(1), 101).unwrap_err();
        assert_eq!(
            err,
            TokenError::InsufficientBalance {
                account: addr(1),
                available: 100,
                required: 101,
            }
        );
        assert_eq!(state.balance_of(addr(1)), 100);
        assert_eq!(state.total_supply(), 100);

        state.burn(addr(1), 40).unwrap();
        assert_eq!(state.balance_of(addr(1)), 60);
        assert_eq!(state.total_supply(), 60);
        assert!(state.conservation_holds());
    }

    #[test]
    fn test_zeroed_accounts_are_pruned() {
        let mut state = LedgerState::new();
        state.mint(addr(1), 75).unwrap();
        state.burn(addr(1), 75).unwrap();

        assert_eq!(state.balance_of(addr(1)), 0);
        assert!(state.balances().is_empty());
        assert_eq!(state.total_supply(), 0);

        state.mint(addr(1), 10).unwrap();
        state.transfer(addr(1), addr(2), 10).unwrap();
        assert!(!state.balances().contains_key(&addr(1)));
        assert_eq!(state.balance_of(addr(2)), 10);
    }

    #[test]
    fn test_transfer_moves_exact_value() {
        let mut state = LedgerState::new();
        state.mint(addr(1), 500).unwrap();

        state.transfer(addr(1), addr(2), 180).unwrap();
        assert_eq!(state.balance_of(addr(1)), 320);
        assert_eq!(state.balance_of(addr(2)), 180);
        assert_eq!(state.total_supply(), 500);
        assert!(state.conservation_holds());

        let err = state.transfer(addr(2), addr(1), 181).unwrap_err();
        assert!(matches!(err, TokenError::InsufficientBalance { .. }));
        assert_eq!(state.balance_of(addr(2)), 180);
    }

    #[test]
    fn test_self_transfer_leaves_balance_untouched() {
        let mut state = LedgerState::new();
        state.mint(addr(1), 42).unwrap();

        state.transfer(addr(1), addr(1), 42).unwrap();
        assert_eq!(state.balance_of(addr(1)), 42);

        let err = state.transfer(addr(1), addr(1), 43).unwrap_err();
        assert!(matches!(err, TokenError::InsufficientBalance { .. }));
    }
}
