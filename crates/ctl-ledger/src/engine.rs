use std::collections::BTreeMap;

use chrono::Utc;
use tracing::debug;

use ctl_crypto::{balance_root, canonical_bytes, sha256};
use ctl_types::{
    Amount, Digest, LedgerEntry, Rules, TokenMetadata, TokenState, VestingSchedule, STATE_VERSION,
};

use crate::error::LedgerError;
use crate::rules::RuleEnforcer;

/// Genesis parameters: token identity plus the rules fixed at creation.
#[derive(Clone, Debug)]
pub struct GenesisConfig {
    pub metadata: TokenMetadata,
    pub soulbound: bool,
    pub max_per_tx: Option<Amount>,
}

/// Vesting parameters supplied with a mint.
///
/// The cliff defaults to the start height when not given.
#[derive(Clone, Debug)]
pub struct VestingParams {
    pub start_height: u64,
    pub cliff_height: Option<u64>,
    pub duration: u64,
}

/// A proposed mint.
#[derive(Clone, Debug)]
pub struct MintRequest {
    pub to: String,
    pub amount: Amount,
    pub issuer: String,
    pub vesting: Option<VestingParams>,
}

/// A proposed transfer. `height` is the chain height the vesting
/// availability check runs at.
#[derive(Clone, Debug)]
pub struct TransferRequest {
    pub from: String,
    pub to: String,
    pub amount: Amount,
    pub height: u64,
}

/// The ledger state-transition engine.
///
/// Operations are functional updates: they take a committed snapshot and
/// return a new committed snapshot, or an error with the input untouched.
/// There is no partially-applied state observable anywhere.
pub struct LedgerEngine;

impl LedgerEngine {
    /// Create the genesis snapshot: metadata and rules, empty balances,
    /// zero-digest previous hash, commitments computed.
    pub fn genesis(config: GenesisConfig) -> Result<TokenState, LedgerError> {
        if config.metadata.symbol.is_empty() {
            return Err(LedgerError::Schema("token symbol is required".into()));
        }

        let mut state = TokenState {
            version: STATE_VERSION.into(),
            token: config.metadata,
            minted_supply: Amount::ZERO,
            rules: Rules::new(config.soulbound, config.max_per_tx),
            balances: BTreeMap::new(),
            vesting: BTreeMap::new(),
            ledger: Vec::new(),
            prev_state_hash: Digest::zero(),
            merkle_root: Digest::zero(),
            state_hash: Digest::zero(),
        };
        recommit(&mut state)?;

        debug!(symbol = %state.token.symbol, state_hash = %state.state_hash.short_hex(), "genesis committed");
        Ok(state)
    }

    /// Apply a mint: enforce, credit, optionally create a vesting schedule,
    /// log, recommit.
    pub fn mint(state: &TokenState, request: &MintRequest) -> Result<TokenState, LedgerError> {
        let attempted = RuleEnforcer::check_mint(state, request.amount)?;

        // Validate the schedule before touching anything so a bad request
        // cannot leave a half-applied snapshot.
        let schedule = request
            .vesting
            .as_ref()
            .map(|params| {
                VestingSchedule::new(
                    request.amount,
                    params.start_height,
                    params.cliff_height.unwrap_or(params.start_height),
                    params.duration,
                )
            })
            .transpose()?;

        let mut next = state.clone();
        next.prev_state_hash = state.state_hash;
        next.minted_supply = attempted;

        let credited = next
            .balance_of(&request.to)
            .checked_add(request.amount, "balance credit")?;
        next.balances.insert(request.to.clone(), credited);

        if let Some(schedule) = schedule {
            // A new schedule replaces any existing one for the address.
            next.vesting.insert(request.to.clone(), schedule);
            next.rules.vesting_enabled = true;
        }

        next.ledger.push(LedgerEntry::mint(
            utc_timestamp(),
            request.to.clone(),
            request.amount,
            request.issuer.clone(),
        ));
        recommit(&mut next)?;

        debug!(
            to = %request.to,
            amount = %request.amount,
            state_hash = %next.state_hash.short_hex(),
            "mint applied"
        );
        Ok(next)
    }

    /// Apply a transfer: enforce, move the balance, account the vested
    /// spend, log, recommit.
    pub fn transfer(
        state: &TokenState,
        request: &TransferRequest,
    ) -> Result<TokenState, LedgerError> {
        RuleEnforcer::check_transfer(state, &request.from, request.amount, request.height)?;

        let mut next = state.clone();
        next.prev_state_hash = state.state_hash;

        let debited = next
            .balance_of(&request.from)
            .checked_sub(request.amount, "balance debit")?;
        next.balances.insert(request.from.clone(), debited);

        let credited = next
            .balance_of(&request.to)
            .checked_add(request.amount, "balance credit")?;
        next.balances.insert(request.to.clone(), credited);

        if let Some(schedule) = next.vesting.get_mut(&request.from) {
            schedule.record_spend(request.amount)?;
        }

        next.ledger.push(LedgerEntry::transfer(
            utc_timestamp(),
            request.from.clone(),
            request.to.clone(),
            request.amount,
            request.height,
        ));
        recommit(&mut next)?;

        debug!(
            from = %request.from,
            to = %request.to,
            amount = %request.amount,
            state_hash = %next.state_hash.short_hex(),
            "transfer applied"
        );
        Ok(next)
    }
}

/// Recompute both commitments: the merkle root over balances, then the
/// state hash over the canonical encoding that embeds it.
fn recommit(state: &mut TokenState) -> Result<(), LedgerError> {
    state.merkle_root = balance_root(&state.balances);
    state.state_hash = sha256(&canonical_bytes(state)?);
    Ok(())
}

fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}
