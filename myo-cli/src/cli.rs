use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use myo_ledger::TokenMetadata;

#[derive(Parser)]
#[command(name = "myo-cli")]
#[command(about = "MYO Token Ledger Tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate an Ed25519 keypair and print its ledger address
    Keygen {
        /// Write the secret key (hex) to this file instead of stdout
        #[arg(short, long, value_name = "OUT")]
        out: Option<PathBuf>,
    },
    /// Run the canned mint/transfer/burn walkthrough on a fresh ledger
    Demo {
        /// Preset token to deploy
        #[arg(long, value_enum, default_value_t = TokenPreset::Myo)]
        token: TokenPreset,
    },
    /// Replay a JSON scenario script against a fresh ledger
    Run {
        #[arg(short, long, value_name = "FILE")]
        script: PathBuf,
        /// Pretty-print the final snapshot
        #[arg(long)]
        pretty: bool,
    },
}

/// The two reference token instances.
#[derive(Debug, Clone, Copy, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPreset {
    Myo,
    Pai,
}

impl TokenPreset {
    pub fn metadata(self) -> TokenMetadata {
        match self {
            TokenPreset::Myo => TokenMetadata::myo(),
            TokenPreset::Pai => TokenMetadata::pai(),
        }
    }
}
