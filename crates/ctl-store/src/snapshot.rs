use std::fs;
use std::path::Path;

use tracing::debug;

use ctl_crypto::canonical_full_bytes;
use ctl_types::{Digest, TokenState, STATE_VERSION};

use crate::error::{StoreError, StoreResult};

/// Load a snapshot from `path`, validating schema and version.
pub fn load(path: &Path) -> StoreResult<TokenState> {
    if !path.exists() {
        return Err(StoreError::StateMissing(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    let state: TokenState =
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Schema {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    if state.version != STATE_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: state.version,
            expected: STATE_VERSION.to_string(),
        });
    }
    debug!(path = %path.display(), state_hash = %state.state_hash.short_hex(), "snapshot loaded");
    Ok(state)
}

/// Write a snapshot to `path` in the export encoding.
pub fn save(path: &Path, state: &TokenState) -> StoreResult<()> {
    fs::write(path, export_text(state)?)?;
    debug!(path = %path.display(), state_hash = %state.state_hash.short_hex(), "snapshot saved");
    Ok(())
}

/// The on-disk export encoding: the canonical JSON snapshot (including
/// `state_hash`) plus exactly one trailing newline.
pub fn export_text(state: &TokenState) -> StoreResult<String> {
    let bytes =
        canonical_full_bytes(state).map_err(|e| StoreError::Encoding(e.to_string()))?;
    let mut text =
        String::from_utf8(bytes).map_err(|e| StoreError::Encoding(e.to_string()))?;
    text.push('\n');
    Ok(text)
}

/// Fail with [`StoreError::Stale`] when the loaded snapshot's commitment is
/// not the one the caller expects to be operating on.
pub fn assert_fresh(state: &TokenState, expected: &Digest) -> StoreResult<()> {
    if state.state_hash != *expected {
        return Err(StoreError::Stale {
            expected: *expected,
            actual: state.state_hash,
        });
    }
    Ok(())
}
