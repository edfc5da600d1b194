//! Snapshot persistence for the Committed Token Ledger.
//!
//! The entire persisted surface is one canonical JSON state file: sorted
//! keys, compact separators, one trailing newline. The file is treated as
//! exclusively owned by whichever process last loaded it; [`assert_fresh`]
//! lets a collaborator detect staleness before applying a new operation.

pub mod error;
pub mod snapshot;

pub use error::{StoreError, StoreResult};
pub use snapshot::{assert_fresh, export_text, load, save};
