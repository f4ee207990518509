use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use myo_common::Address;
use myo_ledger::{Amount, Ledger, TokenError, TokenMetadata};

use crate::cli::TokenPreset;

/// A replayable scenario: who deploys, which token, and the operations to
/// apply in order against the fresh instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub deployer: Address,
    #[serde(default)]
    pub token: TokenSpec,
    pub ops: Vec<ScriptOp>,
}

/// Token selection: a preset by name (`"myo"` / `"pai"`) or full custom
/// metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenSpec {
    Preset(TokenPreset),
    Custom(TokenMetadata),
}

impl Default for TokenSpec {
    fn default() -> Self {
        TokenSpec::Preset(TokenPreset::Myo)
    }
}

impl TokenSpec {
    pub fn metadata(&self) -> TokenMetadata {
        match self {
            TokenSpec::Preset(preset) => preset.metadata(),
            TokenSpec::Custom(metadata) => metadata.clone(),
        }
    }
}

/// One scripted ledger call. Every operation names its caller explicitly —
/// the script plays all the principals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptOp {
    Mint {
        caller: Address,
        to: Address,
        amount: Amount,
    },
    Burn {
        caller: Address,
        from: Address,
        amount: Amount,
    },
    Transfer {
        from: Address,
        to: Address,
        amount: Amount,
    },
    AddGovernor {
        caller: Address,
        account: Address,
    },
    RemoveGovernor {
        caller: Address,
        account: Address,
    },
    AddMinter {
        caller: Address,
        account: Address,
    },
    RemoveMinter {
        caller: Address,
        account: Address,
    },
}

impl ScriptOp {
    pub fn apply(&self, ledger: &mut Ledger) -> Result<(), TokenError> {
        match self {
            ScriptOp::Mint { caller, to, amount } => ledger.mint(*caller, *to, *amount),
            ScriptOp::Burn {
                caller,
                from,
                amount,
            } => ledger.burn(*caller, *from, *amount),
            ScriptOp::Transfer { from, to, amount } => ledger.transfer(*from, *to, *amount),
            ScriptOp::AddGovernor { caller, account } => ledger.add_governor(*caller, *account),
            ScriptOp::RemoveGovernor { caller, account } => {
                ledger.remove_governor(*caller, *account)
            }
            ScriptOp::AddMinter { caller, account } => ledger.add_minter(*caller, *account),
            ScriptOp::RemoveMinter { caller, account } => ledger.remove_minter(*caller, *account),
        }
    }
}

impl Script {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let parsed = serde_json::from_str::<Script>(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(parsed)
    }

    /// Deploys a fresh ledger and replays every operation in order.
    ///
    /// The first rejected operation aborts the run; the error carries the
    /// reason and the partial state is discarded with the returned ledger.
    pub fn run(&self) -> Result<Ledger, TokenError> {
        let mut ledger = Ledger::deploy(self.token.metadata(), self.deployer)?;

        for (index, op) in self.ops.iter().enumerate() {
            match op.apply(&mut ledger) {
                Ok(()) => info!("✅ op #{}: {:?}", index, op),
                Err(e) => {
                    error!("❌ op #{} rejected: {}", index, e);
                    return Err(e);
                }
            }
        }

        Ok(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: u8) -> Address {
        Address::new([tag; 20])
    }

    #[test]
    fn test_script_parses_tagged_ops() {
        let json = r#"{
            "deployer": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "token": "pai",
            "ops": [
                { "type": "add_minter",
                  "caller": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                  "account": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb" },
                { "type": "mint",
                  "caller": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                  "to": "0xcccccccccccccccccccccccccccccccccccccccc",
                  "amount": 1000 }
            ]
        }"#;

        let script: Script = serde_json::from_str(json).unwrap();
        assert_eq!(script.deployer, addr(0xAA));
        assert_eq!(script.token.metadata().symbol, "PAI");
        assert_eq!(script.ops.len(), 2);
        assert!(matches!(
            script.ops[1],
            ScriptOp::Mint { amount: 1000, .. }
        ));
    }

    #[test]
    fn test_token_defaults_to_myo_preset() {
        let json = r#"{
            "deployer": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "ops": []
        }"#;

        let script: Script = serde_json::from_str(json).unwrap();
        assert_eq!(script.token.metadata().symbol, "MYO");
    }

    #[test]
    fn test_custom_metadata_is_accepted() {
        let json = r#"{
            "deployer": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "token": { "name": "Test Token", "symbol": "TST", "decimals": 18 },
            "ops": []
        }"#;

        let script: Script = serde_json::from_str(json).unwrap();
        let ledger = script.run().unwrap();
        assert_eq!(ledger.name(), "Test Token");
        assert_eq!(ledger.symbol(), "TST");
    }

    /// The reference flow as a script: mint 1000, move 7, burn 993.
    #[test]
    fn test_run_replays_to_expected_snapshot() {
        let json = r#"{
            "deployer": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "ops": [
                { "type": "mint",
                  "caller": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                  "to": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                  "amount": 1000 },
                { "type": "transfer",
                  "from": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                  "to": "0xcccccccccccccccccccccccccccccccccccccccc",
                  "amount": 7 },
                { "type": "burn",
                  "caller": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                  "from": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                  "amount": 993 }
            ]
        }"#;

        let script: Script = serde_json::from_str(json).unwrap();
        let ledger = script.run().unwrap();

        assert_eq!(ledger.balance_of(addr(0xBB)), 0);
        assert_eq!(ledger.balance_of(addr(0xCC)), 7);
        assert_eq!(ledger.total_supply(), 7);
        assert_eq!(ledger.events().len(), 3);
        assert!(ledger.conservation_holds());

        let snap = ledger.snapshot();
        assert_eq!(snap.balances.len(), 1);
        assert_eq!(snap.balances[&addr(0xCC)], 7);
    }

    /// A rejected operation aborts the replay with its error.
    #[test]
    fn test_unauthorized_op_aborts_the_run() {
        let json = r#"{
            "deployer": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "ops": [
                { "type": "mint",
                  "caller": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                  "to": "0xcccccccccccccccccccccccccccccccccccccccc",
                  "amount": 5 }
            ]
        }"#;

        let script: Script = serde_json::from_str(json).unwrap();
        let err = script.run().unwrap_err();
        assert!(err.to_string().contains("not a minter"));
    }
}
