mod cli;
mod operations;
mod script;

use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Keygen { out } => operations::generate_keypair(out),
        Commands::Demo { token } => operations::run_demo(token.metadata()),
        Commands::Run { script, pretty } => operations::run_script(&script, pretty),
    }
}
