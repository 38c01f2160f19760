//! guitarguitar CLI - catalogue API checks.
//!
//! # Usage
//!
//! ```bash
//! # Load every collection from the live API and report counts
//! gg-cli check all
//!
//! # Check one endpoint against a different base URL
//! gg-cli check orders --api-url http://localhost:9000/hackathon/
//!
//! # Decode a saved response offline
//! gg-cli decode products samples/products.json
//! ```
//!
//! # Commands
//!
//! - `check` - Fetch and decode live collections
//! - `decode` - Decode a local JSON file with the same decoders

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser)]
#[command(name = "gg-cli")]
#[command(author, version, about = "guitarguitar catalogue tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch collections from the catalogue API and decode them
    Check {
        /// Which collection to check
        #[arg(value_enum)]
        target: CheckTarget,

        /// Override `CATALOGUE_API_URL`
        #[arg(long)]
        api_url: Option<String>,

        /// Override `CATALOGUE_TIMEOUT_SECS`
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Decode a local JSON file
    Decode {
        /// Record type in the file
        #[arg(value_enum)]
        kind: commands::Collection,

        /// Path to a JSON array (or a single record object)
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CheckTarget {
    Customers,
    Products,
    Orders,
    All,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check {
            target,
            api_url,
            timeout,
        } => {
            let client = commands::check::client(api_url.as_deref(), timeout)?;
            let collections: &[commands::Collection] = match target {
                CheckTarget::Customers => &[commands::Collection::Customers],
                CheckTarget::Products => &[commands::Collection::Products],
                CheckTarget::Orders => &[commands::Collection::Orders],
                CheckTarget::All => &commands::Collection::ALL,
            };
            for collection in collections {
                commands::check::run(&client, *collection).await?;
            }
        }
        Commands::Decode { kind, file } => {
            commands::decode::run(kind, &file)?;
        }
    }
    Ok(())
}
