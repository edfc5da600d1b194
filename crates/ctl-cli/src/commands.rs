use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;

use ctl_ledger::{
    GenesisConfig, LedgerEngine, MintRequest, TransferRequest, Verifier, VestingParams,
};
use ctl_types::{TokenMetadata, TokenState};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Init(args) => cmd_init(&cli.state, args),
        Command::Mint(args) => cmd_mint(&cli.state, args),
        Command::Transfer(args) => cmd_transfer(&cli.state, args),
        Command::Export(args) => cmd_export(&cli.state, args),
        Command::Verify(_) => cmd_verify(&cli.state),
    }
}

fn load_state(path: &Path) -> anyhow::Result<TokenState> {
    ctl_store::load(path).with_context(|| format!("loading state from {}", path.display()))
}

fn save_state(path: &Path, state: &TokenState) -> anyhow::Result<()> {
    ctl_store::save(path, state).with_context(|| format!("saving state to {}", path.display()))
}

fn cmd_init(state_path: &Path, args: InitArgs) -> anyhow::Result<()> {
    if state_path.exists() {
        bail!("state file already exists: {}", state_path.display());
    }

    let state = LedgerEngine::genesis(GenesisConfig {
        metadata: TokenMetadata {
            symbol: args.symbol,
            name: args.name,
            description: args.description,
            decimals: args.decimals,
            max_supply: args.max_supply,
        },
        soulbound: args.soulbound,
        max_per_tx: args.max_per_tx,
    })?;
    save_state(state_path, &state)?;

    println!(
        "{} Initialized token {} (max supply {})",
        "✓".green().bold(),
        state.token.symbol.bold(),
        state.token.max_supply
    );
    if state.rules.soulbound {
        println!("  Rules: {}", "soulbound".red());
    }
    println!("  State: {}", state_path.display().to_string().bold());
    println!("  Hash: {}", state.state_hash.short_hex().yellow());
    Ok(())
}

fn cmd_mint(state_path: &Path, args: MintArgs) -> anyhow::Result<()> {
    let state = load_state(state_path)?;
    let vesting = args.vesting_start.map(|start_height| VestingParams {
        start_height,
        cliff_height: args.vesting_cliff,
        duration: args.vesting_duration.unwrap_or(1),
    });
    let vested = vesting.is_some();

    let next = LedgerEngine::mint(
        &state,
        &MintRequest {
            to: args.to.clone(),
            amount: args.amount,
            issuer: args.issuer,
            vesting,
        },
    )?;
    save_state(state_path, &next)?;

    println!(
        "{} Minted {} to {}{}",
        "✓".green().bold(),
        args.amount.to_string().bold(),
        args.to.bold(),
        if vested { " (vesting)".cyan() } else { "".normal() }
    );
    println!(
        "  Supply: {} / {}",
        next.minted_supply,
        next.token.max_supply
    );
    println!("  Hash: {}", next.state_hash.short_hex().yellow());
    Ok(())
}

fn cmd_transfer(state_path: &Path, args: TransferArgs) -> anyhow::Result<()> {
    let state = load_state(state_path)?;
    let next = LedgerEngine::transfer(
        &state,
        &TransferRequest {
            from: args.from_addr.clone(),
            to: args.to.clone(),
            amount: args.amount,
            height: args.height,
        },
    )?;
    save_state(state_path, &next)?;

    println!(
        "{} Transferred {} from {} to {} (height {})",
        "✓".green().bold(),
        args.amount.to_string().bold(),
        args.from_addr.bold(),
        args.to.bold(),
        args.height
    );
    println!("  Hash: {}", next.state_hash.short_hex().yellow());
    Ok(())
}

fn cmd_export(state_path: &Path, args: ExportArgs) -> anyhow::Result<()> {
    let state = load_state(state_path)?;
    match args.output {
        Some(path) => {
            save_state(&path, &state)?;
            println!(
                "{} Exported snapshot to {}",
                "✓".green().bold(),
                path.display().to_string().bold()
            );
        }
        None => print!("{}", ctl_store::export_text(&state)?),
    }
    Ok(())
}

fn cmd_verify(state_path: &Path) -> anyhow::Result<()> {
    let state = load_state(state_path)?;
    let report = Verifier::verify_snapshot(&state)?;

    let status = |ok: bool| {
        if ok {
            "valid".green()
        } else {
            "MISMATCH".red().bold()
        }
    };
    println!("  merkle_root: {}", status(report.merkle_root_ok));
    println!("  state_hash: {}", status(report.state_hash_ok));

    if report.is_valid() {
        println!("{} Snapshot commitments verified", "✓".green().bold());
        Ok(())
    } else {
        bail!("verification failed: {}", report.failed_checks().join(", "));
    }
}
