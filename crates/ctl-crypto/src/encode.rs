use ctl_types::TokenState;
use serde_json::Value;

/// Errors from canonical encoding.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Canonical byte encoding of a snapshot, excluding `state_hash`.
///
/// This is the hash input for the state commitment: keys sorted
/// lexicographically at every nesting level, compact separators, optional
/// fields present as explicit `null`. Two logically equal snapshots produce
/// identical bytes regardless of construction order.
///
/// Sorted keys come from `serde_json`'s default BTreeMap-backed `Map`; the
/// `preserve_order` feature must never be enabled in this workspace.
pub fn canonical_bytes(state: &TokenState) -> Result<Vec<u8>, EncodeError> {
    let mut value = to_value(state)?;
    if let Value::Object(map) = &mut value {
        map.remove("state_hash");
    }
    to_bytes(&value)
}

/// Canonical byte encoding of the full snapshot, including `state_hash`.
///
/// This is the on-disk snapshot body (the export format appends one
/// trailing newline).
pub fn canonical_full_bytes(state: &TokenState) -> Result<Vec<u8>, EncodeError> {
    to_bytes(&to_value(state)?)
}

fn to_value(state: &TokenState) -> Result<Value, EncodeError> {
    serde_json::to_value(state).map_err(|e| EncodeError::Serialization(e.to_string()))
}

fn to_bytes(value: &Value) -> Result<Vec<u8>, EncodeError> {
    serde_json::to_vec(value).map_err(|e| EncodeError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use ctl_types::{
        Amount, Digest, LedgerEntry, Rules, TokenMetadata, TokenState, VestingSchedule,
        STATE_VERSION,
    };

    use crate::hasher::sha256;

    use super::*;

    fn state_with_balances(pairs: &[(&str, u128)]) -> TokenState {
        let mut balances = BTreeMap::new();
        for (address, amount) in pairs {
            balances.insert(address.to_string(), Amount::new(*amount));
        }
        TokenState {
            version: STATE_VERSION.into(),
            token: TokenMetadata {
                symbol: "TKN".into(),
                name: None,
                description: None,
                decimals: 0,
                max_supply: Amount::new(1_000_000),
            },
            minted_supply: Amount::new(500),
            rules: Rules::new(false, None),
            balances,
            vesting: BTreeMap::new(),
            ledger: vec![],
            prev_state_hash: Digest::zero(),
            merkle_root: Digest::zero(),
            state_hash: Digest::from_bytes([0xff; 32]),
        }
    }

    #[test]
    fn state_hash_is_excluded() {
        let state = state_with_balances(&[("alice", 500)]);
        let bytes = canonical_bytes(&state).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.contains("state_hash"));
        assert!(text.contains("prev_state_hash"));
        assert!(text.contains("merkle_root"));
    }

    #[test]
    fn full_encoding_includes_state_hash() {
        let state = state_with_balances(&[("alice", 500)]);
        let text = String::from_utf8(canonical_full_bytes(&state).unwrap()).unwrap();
        assert!(text.contains(&format!("\"state_hash\":\"{}\"", "ff".repeat(32))));
    }

    #[test]
    fn encoding_is_independent_of_insertion_order() {
        let forward = state_with_balances(&[("alice", 1), ("bob", 2), ("carol", 3)]);
        let reverse = state_with_balances(&[("carol", 3), ("bob", 2), ("alice", 1)]);
        assert_eq!(
            canonical_bytes(&forward).unwrap(),
            canonical_bytes(&reverse).unwrap()
        );
    }

    #[test]
    fn keys_are_sorted_and_compact() {
        let state = state_with_balances(&[("bob", 2), ("alice", 1)]);
        let text = String::from_utf8(canonical_bytes(&state).unwrap()).unwrap();
        assert!(!text.contains(' '));
        assert!(!text.contains('\n'));
        let alice = text.find("\"alice\"").unwrap();
        let bob = text.find("\"bob\"").unwrap();
        assert!(alice < bob);
        // top-level keys sorted too
        assert!(text.find("\"balances\"").unwrap() < text.find("\"ledger\"").unwrap());
        assert!(text.find("\"ledger\"").unwrap() < text.find("\"version\"").unwrap());
    }

    /// Cross-checked against the reference encoder
    /// (`json.dumps(state, sort_keys=True, separators=(",", ":"))` hashed
    /// with SHA-256). Any change to the snapshot shape breaks interchange.
    #[test]
    fn canonical_state_hash_golden_vector() {
        let mut balances = BTreeMap::new();
        balances.insert("alice".to_string(), Amount::new(400));
        balances.insert("bob".to_string(), Amount::new(100));

        let mut vesting = BTreeMap::new();
        let mut schedule = VestingSchedule::new(Amount::new(500), 0, 0, 100).unwrap();
        schedule.record_spend(Amount::new(100)).unwrap();
        vesting.insert("alice".to_string(), schedule);

        let mut rules = Rules::new(false, None);
        rules.vesting_enabled = true;

        let state = TokenState {
            version: STATE_VERSION.into(),
            token: TokenMetadata {
                symbol: "TKN".into(),
                name: None,
                description: None,
                decimals: 0,
                max_supply: Amount::new(1_000_000),
            },
            minted_supply: Amount::new(500),
            rules,
            balances,
            vesting,
            ledger: vec![
                LedgerEntry::mint(
                    "2026-01-02T03:04:05.000000Z".into(),
                    "alice".into(),
                    Amount::new(500),
                    "issuer-1".into(),
                ),
                LedgerEntry::transfer(
                    "2026-01-02T03:04:06.000000Z".into(),
                    "alice".into(),
                    "bob".into(),
                    Amount::new(100),
                    10,
                ),
            ],
            prev_state_hash: Digest::zero(),
            merkle_root: Digest::from_hex(
                "96ec8067a798bbdb64b06a1210516255315894e07b362aa1f0d82173fdc1fc2c",
            )
            .unwrap(),
            state_hash: Digest::zero(),
        };

        let hash = sha256(&canonical_bytes(&state).unwrap());
        assert_eq!(
            hash.to_hex(),
            "c7d14bd197597851ecf208cffd8993beab540d45c17308884e2cc87f585109ce"
        );
    }

    #[test]
    fn absent_optionals_are_explicit_nulls() {
        let state = state_with_balances(&[]);
        let text = String::from_utf8(canonical_bytes(&state).unwrap()).unwrap();
        assert!(text.contains("\"name\":null"));
        assert!(text.contains("\"description\":null"));
        assert!(text.contains("\"max_per_tx\":null"));
    }
}
