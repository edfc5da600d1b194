//! Foundation types for the Committed Token Ledger (CTL).
//!
//! This crate provides the core value and record types used throughout the
//! CTL system. Every other CTL crate depends on `ctl-types`.
//!
//! # Key Types
//!
//! - [`Digest`] — 32-byte SHA-256 commitment digest, hex-encoded in JSON
//! - [`Amount`] — Non-negative token quantity with checked arithmetic
//! - [`TokenMetadata`] — Immutable token identity fixed at genesis
//! - [`Rules`] — Transfer rules in force for a token
//! - [`VestingSchedule`] — Per-address unlock schedule with spend accounting
//! - [`LedgerEntry`] — One applied operation in the append-only log
//! - [`TokenState`] — Aggregate committed snapshot of one token

pub mod amount;
pub mod digest;
pub mod entry;
pub mod error;
pub mod state;
pub mod token;
pub mod vesting;

pub use amount::Amount;
pub use digest::Digest;
pub use entry::{LedgerEntry, OpKind, TxRecord};
pub use error::TypeError;
pub use state::{TokenState, STATE_VERSION};
pub use token::{Rules, TokenMetadata};
pub use vesting::VestingSchedule;
