//! Commitment primitives for the Committed Token Ledger.
//!
//! Provides the canonical snapshot encoding, SHA-256 content hashing, the
//! merkle commitment over balance sets, and the transfer attestation
//! envelope.
//!
//! Every digest this crate produces is part of the published interchange
//! format: implementations must be bit-exact-compatible, so the hash
//! function is plain SHA-256 with no domain separation and the encodings
//! below must not change shape.

pub mod attest;
pub mod encode;
pub mod hasher;
pub mod merkle;

pub use attest::{AttestError, AttestationParams, TransferAttestation, ATTEST_DOMAIN};
pub use encode::{canonical_bytes, canonical_full_bytes, EncodeError};
pub use hasher::{sha256, sha256_hex};
pub use merkle::balance_root;
