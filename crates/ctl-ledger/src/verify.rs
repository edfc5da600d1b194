use ctl_types::{Digest, TokenState};

use ctl_crypto::{balance_root, canonical_bytes, sha256};

use crate::error::LedgerError;

/// Result of verifying one snapshot's commitments.
///
/// Both checks are always evaluated; a caller sees every mismatch at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyReport {
    pub merkle_root_ok: bool,
    pub state_hash_ok: bool,
    /// Freshly recomputed values, for diagnostics.
    pub expected_merkle_root: Digest,
    pub expected_state_hash: Digest,
}

impl VerifyReport {
    /// Returns `true` if both commitments match.
    pub fn is_valid(&self) -> bool {
        self.merkle_root_ok && self.state_hash_ok
    }

    /// Names of the failed checks, in a fixed order.
    pub fn failed_checks(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if !self.merkle_root_ok {
            failed.push("merkle_root");
        }
        if !self.state_hash_ok {
            failed.push("state_hash");
        }
        failed
    }

    /// Convert to a `Result`, reporting every failed check.
    pub fn into_result(self) -> Result<(), LedgerError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(LedgerError::CommitmentMismatch {
                failed: self
                    .failed_checks()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
        }
    }
}

/// Errors from chain verification over a snapshot sequence.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("genesis snapshot must carry the zero previous state hash")]
    GenesisNotAnchored,

    #[error("broken chain link at index {index}: prev_state_hash does not match predecessor")]
    BrokenLink { index: usize },

    #[error("snapshot at index {index} failed commitment checks: {}", .failed.join(", "))]
    SnapshotInvalid { index: usize, failed: Vec<String> },

    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Read-only commitment verifier.
pub struct Verifier;

impl Verifier {
    /// Recompute both commitments from the snapshot's content and compare
    /// each against the stored value independently.
    ///
    /// The state-hash recomputation hashes the canonical encoding with the
    /// *stored* merkle root embedded, so the two checks stay independent
    /// diagnostics: a wrong stored root fails both, a wrong stored state
    /// hash fails only one.
    pub fn verify_snapshot(state: &TokenState) -> Result<VerifyReport, LedgerError> {
        let expected_merkle_root = balance_root(&state.balances);
        let expected_state_hash = sha256(&canonical_bytes(state)?);

        Ok(VerifyReport {
            merkle_root_ok: expected_merkle_root == state.merkle_root,
            state_hash_ok: expected_state_hash == state.state_hash,
            expected_merkle_root,
            expected_state_hash,
        })
    }

    /// Verify an exported snapshot sequence: the genesis anchor, every
    /// chain link, and every snapshot's own commitments.
    pub fn verify_chain(snapshots: &[TokenState]) -> Result<(), ChainError> {
        if snapshots.is_empty() {
            return Ok(());
        }

        if !snapshots[0].prev_state_hash.is_zero() {
            return Err(ChainError::GenesisNotAnchored);
        }

        for (index, snapshot) in snapshots.iter().enumerate() {
            if index > 0 && snapshot.prev_state_hash != snapshots[index - 1].state_hash {
                return Err(ChainError::BrokenLink { index });
            }

            let report = Self::verify_snapshot(snapshot)
                .map_err(|e| ChainError::Encoding(e.to_string()))?;
            if !report.is_valid() {
                return Err(ChainError::SnapshotInvalid {
                    index,
                    failed: report
                        .failed_checks()
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                });
            }
        }

        Ok(())
    }
}
