//! Direct store access: get, put, exists, latest
//!
//! Each command opens its own pool, runs one repository call, and closes the
//! pool before returning.

use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser};
use serde_json::Value;

use justctl_server::{JustificationRepo, JustificationStore};

use super::DbArgs;

/// Chain and block that identify a justification
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Chain identifier (matched case-insensitively)
    #[arg(long, short = 'c')]
    pub chain_id: String,

    /// Block number on that chain
    #[arg(long, short = 'n')]
    pub block_number: u32,
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Print only the payload instead of the whole record
    #[arg(long)]
    pub data_only: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

#[derive(Parser, Debug)]
pub struct PutArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Justification payload as JSON (read from stdin when omitted)
    #[arg(long, short = 'd')]
    pub data: Option<String>,

    #[command(flatten)]
    pub db: DbArgs,
}

#[derive(Parser, Debug)]
pub struct ExistsArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    #[command(flatten)]
    pub db: DbArgs,
}

#[derive(Parser, Debug)]
pub struct LatestArgs {
    /// Chain identifier (matched case-insensitively)
    #[arg(long, short = 'c')]
    pub chain_id: String,

    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_get(args: GetArgs) -> Result<()> {
    let repo = JustificationRepo::new(args.db.connect().await?);
    let result = repo.get(&args.key.chain_id, args.key.block_number).await;
    repo.database().shutdown().await;

    let Some(record) = result.context("Failed to fetch justification")? else {
        bail!(
            "No justification found for {} block {}",
            args.key.chain_id,
            args.key.block_number
        );
    };

    let output = if args.data_only {
        serde_json::to_string_pretty(&record.data)?
    } else {
        serde_json::to_string_pretty(&record)?
    };
    println!("{}", output);
    Ok(())
}

pub async fn run_put(args: PutArgs) -> Result<()> {
    // Parse before connecting so bad input never costs a round trip.
    let data = parse_payload(args.data)?;

    let repo = JustificationRepo::new(args.db.connect().await?);
    let result = repo
        .put(&args.key.chain_id, args.key.block_number, &data)
        .await;
    repo.database().shutdown().await;
    result.context("Failed to store justification")?;

    tracing::info!(
        chain_id = %args.key.chain_id,
        block_number = args.key.block_number,
        "justification stored"
    );
    Ok(())
}

pub async fn run_exists(args: ExistsArgs) -> Result<()> {
    let repo = JustificationRepo::new(args.db.connect().await?);
    let result = repo.exists(&args.key.chain_id, args.key.block_number).await;
    repo.database().shutdown().await;

    println!("{}", result.context("Failed to check justification")?);
    Ok(())
}

pub async fn run_latest(args: LatestArgs) -> Result<()> {
    let repo = JustificationRepo::new(args.db.connect().await?);
    let result = repo.latest_block_number(&args.chain_id).await;
    repo.database().shutdown().await;

    match result.context("Failed to query latest block")? {
        Some(block) => println!("{}", block),
        None => bail!("No justifications stored for {}", args.chain_id),
    }
    Ok(())
}

fn parse_payload(inline: Option<String>) -> Result<Value> {
    let raw = match inline {
        Some(raw) => raw,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read payload from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Payload is not valid JSON")
}
