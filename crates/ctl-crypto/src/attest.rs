use ctl_types::{Amount, Digest};
use serde::{Deserialize, Serialize};

use crate::hasher::sha256;

/// Default domain tag for transfer attestations. Prevents cross-protocol
/// replay of the attestation hash.
pub const ATTEST_DOMAIN: &str = "CTL::TRANSFER::V1";

/// Inputs for sealing a [`TransferAttestation`].
#[derive(Clone, Debug)]
pub struct AttestationParams {
    pub domain: String,
    pub sender: String,
    pub recipient: String,
    pub amount: Amount,
    /// The ledger's pre-mutation state commitment.
    pub prev_state_hash: Digest,
    pub nonce: u64,
    pub chain_id: String,
    pub identity_verified: bool,
}

/// Tamper-evidence tag binding transfer parameters to a prior state
/// commitment.
///
/// The attestation hash covers exactly the pipe-joined canonical fields
/// (domain, sender, recipient, amount, prior hash, nonce, chain id). It is
/// NOT a zero-knowledge proof and proves nothing about identity: the
/// `identity_verified` flag is an input assertion by the caller, enforced
/// only in the sense that sealing refuses when it is false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferAttestation {
    pub domain: String,
    pub sender: String,
    pub recipient: String,
    pub amount: Amount,
    pub prev_state_hash: Digest,
    pub nonce: u64,
    pub chain_id: String,
    pub identity_verified: bool,
    pub attestation_hash: Digest,
}

/// Errors from attestation sealing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AttestError {
    #[error("identity not verified; refusing to attest")]
    IdentityUnverified,
}

impl TransferAttestation {
    /// Seal an attestation over the given parameters.
    pub fn seal(params: AttestationParams) -> Result<Self, AttestError> {
        if !params.identity_verified {
            return Err(AttestError::IdentityUnverified);
        }
        let attestation_hash = canonical_hash(
            &params.domain,
            &params.sender,
            &params.recipient,
            params.amount,
            &params.prev_state_hash,
            params.nonce,
            &params.chain_id,
        );
        Ok(Self {
            domain: params.domain,
            sender: params.sender,
            recipient: params.recipient,
            amount: params.amount,
            prev_state_hash: params.prev_state_hash,
            nonce: params.nonce,
            chain_id: params.chain_id,
            identity_verified: params.identity_verified,
            attestation_hash,
        })
    }

    /// Recompute the attestation hash and compare against the sealed value.
    pub fn verify(&self) -> bool {
        let expected = canonical_hash(
            &self.domain,
            &self.sender,
            &self.recipient,
            self.amount,
            &self.prev_state_hash,
            self.nonce,
            &self.chain_id,
        );
        expected == self.attestation_hash
    }
}

// Field order is part of the format; do not reorder.
fn canonical_hash(
    domain: &str,
    sender: &str,
    recipient: &str,
    amount: Amount,
    prev_state_hash: &Digest,
    nonce: u64,
    chain_id: &str,
) -> Digest {
    let canonical =
        format!("{domain}|{sender}|{recipient}|{amount}|{prev_state_hash}|{nonce}|{chain_id}");
    sha256(canonical.as_bytes())
}
