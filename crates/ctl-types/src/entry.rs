use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// The kind of an applied operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    Mint,
    Transfer,
}

/// Operation-specific transaction record.
///
/// Serialized untagged: mint records carry an issuer, transfer records carry
/// the sender and the height the vesting check ran at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TxRecord {
    Mint {
        to: String,
        amount: Amount,
        issuer: String,
    },
    Transfer {
        from: String,
        to: String,
        amount: Amount,
        height: u64,
    },
}

/// One applied operation, as recorded in the append-only log.
///
/// Entries are never rewritten or removed; the timestamp is an opaque UTC
/// string supplied by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub op: OpKind,
    pub timestamp: String,
    pub tx: TxRecord,
}

impl LedgerEntry {
    pub fn mint(timestamp: String, to: String, amount: Amount, issuer: String) -> Self {
        Self {
            op: OpKind::Mint,
            timestamp,
            tx: TxRecord::Mint { to, amount, issuer },
        }
    }

    pub fn transfer(
        timestamp: String,
        from: String,
        to: String,
        amount: Amount,
        height: u64,
    ) -> Self {
        Self {
            op: OpKind::Transfer,
            timestamp,
            tx: TxRecord::Transfer {
                from,
                to,
                amount,
                height,
            },
        }
    }
}
