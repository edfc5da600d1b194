use std::collections::BTreeMap;

use ctl_types::{Amount, Digest};

use crate::hasher::sha256;

/// Merkle root committing to a balance set.
///
/// - Empty balances hash to `sha256("")`.
/// - Each leaf is `sha256("<address>:<amount>")` over the UTF-8 text, with
///   the amount in decimal. Leaves are ordered by address, never by leaf
///   value, so the ordering is stable and independent of hash outputs.
/// - Parent nodes hash the concatenation of their children's lowercase hex
///   text (not the raw digest bytes).
/// - A level with an odd count duplicates its last node before pairing.
///
/// The duplicate-last-node padding admits distinct trees with equal roots
/// under certain reorderings; it is a known weak construction kept solely
/// for bit compatibility with existing snapshots.
pub fn balance_root(balances: &BTreeMap<String, Amount>) -> Digest {
    if balances.is_empty() {
        return sha256(b"");
    }

    let mut level: Vec<Digest> = balances
        .iter()
        .map(|(address, amount)| leaf(address, *amount))
        .collect();

    while level.len() > 1 {
        if level.len() % 2 == 1 {
            let last = level[level.len() - 1];
            level.push(last);
        }
        level = level
            .chunks(2)
            .map(|pair| combine(&pair[0], &pair[1]))
            .collect();
    }

    level[0]
}

fn leaf(address: &str, amount: Amount) -> Digest {
    sha256(format!("{address}:{amount}").as_bytes())
}

fn combine(left: &Digest, right: &Digest) -> Digest {
    let mut text = String::with_capacity(128);
    text.push_str(&left.to_hex());
    text.push_str(&right.to_hex());
    sha256(text.as_bytes())
}
