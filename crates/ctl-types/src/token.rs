use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Immutable token identity, fixed at genesis.
///
/// `name` and `description` are optional display metadata; absent values are
/// serialized as explicit `null` so the canonical encoding has stable field
/// presence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub symbol: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub decimals: u8,
    pub max_supply: Amount,
}

/// Transfer rules in force for a token.
///
/// `transferable` is derived from `soulbound` and kept in the snapshot for
/// interchange; `vesting_enabled` latches true once any schedule exists and
/// never resets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub soulbound: bool,
    pub transferable: bool,
    pub max_per_tx: Option<Amount>,
    pub vesting_enabled: bool,
}

impl Rules {
    pub fn new(soulbound: bool, max_per_tx: Option<Amount>) -> Self {
        Self {
            soulbound,
            transferable: !soulbound,
            max_per_tx,
            vesting_enabled: false,
        }
    }
}
