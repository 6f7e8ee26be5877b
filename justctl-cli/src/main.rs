//! justctl CLI - justification store and query server
//!
//! This is the main entry point for the justctl command-line tool, which provides:
//! - The HTTP query server (`serve` subcommand)
//! - Direct store access for indexers and operators (`get`, `put`, `exists`, `latest`)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "justctl",
    author,
    version,
    about = "Store and serve block justifications keyed by chain id and block number"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP query server (GET /justification, GET /health)
    Serve(commands::serve::ServeArgs),
    /// Fetch a stored justification
    Get(commands::store::GetArgs),
    /// Store or overwrite a justification
    Put(commands::store::PutArgs),
    /// Check whether a justification is stored
    Exists(commands::store::ExistsArgs),
    /// Print the highest stored block number for a chain
    Latest(commands::store::LatestArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load but don't fail if there is no .env file
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(cli.debug).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Get(args) => commands::run_get(args).await,
        Commands::Put(args) => commands::run_put(args).await,
        Commands::Exists(args) => commands::run_exists(args).await,
        Commands::Latest(args) => commands::run_latest(args).await,
    }
}
