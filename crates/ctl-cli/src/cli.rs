use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ctl_types::Amount;

#[derive(Parser)]
#[command(
    name = "ctl",
    about = "Committed Token Ledger — a hash-committed fungible-token ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the canonical state file
    #[arg(long, global = true, default_value = "ctl_state.json")]
    pub state: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the genesis snapshot with token metadata and rules
    Init(InitArgs),
    /// Mint new tokens, optionally under a vesting schedule
    Mint(MintArgs),
    /// Transfer tokens between addresses
    Transfer(TransferArgs),
    /// Write the current snapshot, optionally to an alternate path
    Export(ExportArgs),
    /// Recompute and compare the snapshot commitments
    Verify(VerifyArgs),
}

#[derive(Args)]
pub struct InitArgs {
    #[arg(long)]
    pub symbol: String,
    #[arg(long)]
    pub max_supply: Amount,
    #[arg(long, default_value = "0")]
    pub decimals: u8,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub soulbound: bool,
    #[arg(long)]
    pub max_per_tx: Option<Amount>,
}

#[derive(Args)]
pub struct MintArgs {
    #[arg(long)]
    pub to: String,
    #[arg(long)]
    pub amount: Amount,
    #[arg(long)]
    pub issuer: String,
    /// Start height of a vesting schedule; supplying it creates one
    #[arg(long)]
    pub vesting_start: Option<u64>,
    /// Cliff height (defaults to the start height)
    #[arg(long, requires = "vesting_start")]
    pub vesting_cliff: Option<u64>,
    /// Schedule duration in heights (defaults to 1)
    #[arg(long, requires = "vesting_start")]
    pub vesting_duration: Option<u64>,
}

#[derive(Args)]
pub struct TransferArgs {
    #[arg(long = "from")]
    pub from_addr: String,
    #[arg(long)]
    pub to: String,
    #[arg(long)]
    pub amount: Amount,
    /// Chain height the vesting availability check runs at
    #[arg(long, default_value = "0")]
    pub height: u64,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Write to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct VerifyArgs {}
