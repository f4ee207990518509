use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Decimal precision shared by every deployed instance.
pub const TOKEN_DECIMALS: u8 = 18;

/// Longest symbol accepted at deployment.
const MAX_SYMBOL_LEN: usize = 10;

/// Vanity metadata fixed when an instance is deployed, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenMetadata {
    pub fn new(name: &str, symbol: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: TOKEN_DECIMALS,
        }
    }

    /// The MYO.Finance governance token instance.
    pub fn myo() -> Self {
        Self::new("MYO.Finance Governance Token", "MYO")
    }

    /// The intangible Argentine peso instance.
    pub fn pai() -> Self {
        Self::new("Peso Argentino Intangible", "PAI")
    }

    /// Strict validation of deployment parameters.
    pub fn validate(&self) -> Result<(), TokenError> {
        if self.name.trim().is_empty() {
            return Err(TokenError::InvalidMetadata("name cannot be empty".to_string()));
        }
        if self.symbol.trim().is_empty() {
            return Err(TokenError::InvalidMetadata("symbol cannot be empty".to_string()));
        }
        if self.symbol.len() > MAX_SYMBOL_LEN {
            return Err(TokenError::InvalidMetadata(format!(
                "symbol is too long: {} chars, max {}",
                self.symbol.len(),
                MAX_SYMBOL_LEN
            )));
        }
        Ok(())
    }
}
