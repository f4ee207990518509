use std::fs;
use std::path::{Path, PathBuf};

use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;

use myo_common::Address;
use myo_ledger::{Ledger, TokenMetadata};

use crate::script::Script;

/// Generates a fresh Ed25519 keypair and prints the ledger address it owns.
/// The secret key goes to `out` when given, to stdout otherwise.
pub fn generate_keypair(out: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let mut csprng = OsRng;
    let signing_key = SigningKey::generate(&mut csprng);
    let verifying_key = signing_key.verifying_key();
    let address = Address::from_public_key(&verifying_key);

    println!("Address: {}", address);
    println!("PubHex: {}", hex::encode(verifying_key.to_bytes()));

    match out {
        Some(path) => {
            fs::write(&path, hex::encode(signing_key.to_bytes()))?;
            println!("Secret key written to {}", path.display());
        }
        None => {
            println!("SecretHex: {}", hex::encode(signing_key.to_bytes()));
        }
    }

    Ok(())
}

/// Walks a fresh ledger through the canonical flow: mint 1000 to A, move 7
/// from A to B, burn A's 993, then grant and revoke a minter to show the
/// authorization gate closing.
pub fn run_demo(metadata: TokenMetadata) -> Result<(), Box<dyn std::error::Error>> {
    let mut csprng = OsRng;
    let deployer = Address::from_public_key(&SigningKey::generate(&mut csprng).verifying_key());
    let alice = Address::from_public_key(&SigningKey::generate(&mut csprng).verifying_key());
    let bob = Address::from_public_key(&SigningKey::generate(&mut csprng).verifying_key());

    println!("🏛️ Deploying {} ({})", metadata.name, metadata.symbol);
    let mut ledger = Ledger::deploy(metadata, deployer)?;
    println!("   deployer: {}", deployer);
    println!("   alice:    {}", alice);
    println!("   bob:      {}", bob);

    ledger.mint(deployer, alice, 1_000)?;
    println!("💰 Minted 1000 to alice | supply={}", ledger.total_supply());

    ledger.transfer(alice, bob, 7)?;
    println!(
        "🔄 alice -> bob: 7 | alice={} bob={}",
        ledger.balance_of(alice),
        ledger.balance_of(bob)
    );

    ledger.burn(deployer, alice, 993)?;
    println!(
        "🔥 Burned 993 from alice | alice={} supply={}",
        ledger.balance_of(alice),
        ledger.total_supply()
    );

    ledger.add_minter(deployer, alice)?;
    println!("✅ alice granted minter status");

    ledger.mint(alice, bob, 50)?;
    println!("💰 alice minted 50 to bob | supply={}", ledger.total_supply());

    ledger.remove_minter(deployer, alice)?;
    match ledger.mint(alice, bob, 1) {
        Ok(()) => println!("❌ Mint after revocation SUCCEEDED (should be blocked)"),
        Err(e) => println!("✅ Mint after revocation BLOCKED: {}", e),
    }

    println!();
    println!("📜 Event log ({} records):", ledger.events().len());
    for event in ledger.events() {
        println!("   {} -> {} : {}", event.from, event.to, event.amount);
    }
    println!(
        "Conservation holds: {} (supply={})",
        ledger.conservation_holds(),
        ledger.total_supply()
    );

    Ok(())
}

/// Replays a JSON scenario against a fresh ledger and prints the final
/// snapshot as JSON.
pub fn run_script(path: &Path, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let script = Script::load_from_file(path)?;
    let ledger = script.run()?;

    let snapshot = ledger.snapshot();
    let json = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{}", json);

    Ok(())
}
