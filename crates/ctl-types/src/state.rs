use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::digest::Digest;
use crate::entry::LedgerEntry;
use crate::token::{Rules, TokenMetadata};
use crate::vesting::VestingSchedule;

/// Snapshot schema version.
pub const STATE_VERSION: &str = "ctl-1";

/// Aggregate committed snapshot of one token.
///
/// A snapshot is advanced strictly by sequential genesis → mint/transfer
/// applications, each producing a new value whose `prev_state_hash` equals
/// the prior snapshot's `state_hash`. Commitment fields (`merkle_root`,
/// `state_hash`) are always recomputed on commit, never read stale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenState {
    pub version: String,
    pub token: TokenMetadata,
    pub minted_supply: Amount,
    pub rules: Rules,
    pub balances: BTreeMap<String, Amount>,
    pub vesting: BTreeMap<String, VestingSchedule>,
    pub ledger: Vec<LedgerEntry>,
    pub prev_state_hash: Digest,
    pub merkle_root: Digest,
    pub state_hash: Digest,
}

impl TokenState {
    /// Balance of `address`, zero if the address has never held tokens.
    pub fn balance_of(&self, address: &str) -> Amount {
        self.balances.get(address).copied().unwrap_or(Amount::ZERO)
    }
}
