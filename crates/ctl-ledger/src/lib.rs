//! State-transition and commitment engine for the Committed Token Ledger.
//!
//! This crate is the heart of CTL. It provides:
//! - Rule enforcement on mint/transfer (validate-then-apply)
//! - `LedgerEngine`: functional snapshot updates with recomputed commitments
//! - `Verifier`: independent merkle-root and state-hash recomputation, plus
//!   hash-chain verification over exported snapshot sequences
//!
//! Operations never mutate their input: a failed enforcement check returns
//! an error and the caller's snapshot is byte-identical to before the call.

pub mod engine;
pub mod error;
pub mod rules;
pub mod verify;

pub use engine::{GenesisConfig, LedgerEngine, MintRequest, TransferRequest, VestingParams};
pub use error::LedgerError;
pub use rules::RuleEnforcer;
pub use verify::{ChainError, Verifier, VerifyReport};
