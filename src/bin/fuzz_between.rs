//! AFL fuzz harness for key generation
//!
//! This harness checks the ordering invariants:
//! 1. Every generated key lies strictly between its neighbours
//! 2. Every generated key re-validates under the same alphabet
//! 3. Bulk generation returns strictly increasing keys within bounds
//!
//! Model: a single sorted list that is edited by inserting single keys or
//! batches of keys at fuzzer-chosen gaps, under a fuzzer-chosen alphabet.

use afl::fuzz;
use fracdex::{generate_key_between, generate_n_keys_between, validate_order_key, Digits};

/// Cap on list size so a single input cannot run for too long.
const MAX_KEYS: usize = 4096;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Insert one key at a gap
    Insert { gap_frac: u8 },
    /// Insert a batch of keys at a gap
    Bulk { gap_frac: u8, count: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 2;
        let rest = &bytes[1..];

        match op_type {
            0 if !rest.is_empty() => Some((FuzzOp::Insert { gap_frac: rest[0] }, &rest[1..])),
            1 if rest.len() >= 2 => {
                let op = FuzzOp::Bulk {
                    gap_frac: rest[0],
                    count: rest[1] % 32, // 0-31 keys
                };
                Some((op, &rest[2..]))
            }
            _ => None,
        }
    }
}

/// Pick an alphabet from the first input byte.
fn alphabet(selector: u8) -> Digits {
    return match selector % 4 {
        0 => Digits::base10().clone(),
        1 => Digits::base62().clone(),
        2 => Digits::base95().clone(),
        // A tiny base makes keys grow quickly.
        _ => Digits::new("01").unwrap(),
    };
}

fn gap(len: usize, frac: u8) -> usize {
    return (frac as usize * (len + 1) / 256).min(len);
}

fn check_between(key: &str, a: Option<&str>, b: Option<&str>, digits: &Digits) {
    if let Some(a) = a {
        assert!(a < key, "{a:?} < {key:?}");
    }
    if let Some(b) = b {
        assert!(key < b, "{key:?} < {b:?}");
    }
    assert!(validate_order_key(key, digits).is_ok(), "invalid key {key:?}");
}

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((&selector, mut remaining)) = data.split_first() else {
            return;
        };
        let digits = alphabet(selector);
        let mut list: Vec<String> = Vec::new();

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;
            if list.len() >= MAX_KEYS {
                break;
            }

            match op {
                FuzzOp::Insert { gap_frac } => {
                    let at = gap(list.len(), gap_frac);
                    let a = if at == 0 { None } else { Some(list[at - 1].as_str()) };
                    let b = list.get(at).map(String::as_str);
                    let key = generate_key_between(a, b, &digits).expect("generation failed");
                    check_between(&key, a, b, &digits);
                    list.insert(at, key);
                }

                FuzzOp::Bulk { gap_frac, count } => {
                    let at = gap(list.len(), gap_frac);
                    let a = if at == 0 { None } else { Some(list[at - 1].as_str()) };
                    let b = list.get(at).map(String::as_str);
                    let keys = generate_n_keys_between(a, b, count as usize, &digits)
                        .expect("bulk generation failed");
                    assert_eq!(keys.len(), count as usize);
                    for key in &keys {
                        check_between(key, a, b, &digits);
                    }
                    for pair in keys.windows(2) {
                        assert!(pair[0] < pair[1], "bulk keys out of order: {pair:?}");
                    }
                    list.splice(at..at, keys);
                }
            }
        }

        // The whole list must still be sorted.
        for pair in list.windows(2) {
            assert!(pair[0] < pair[1], "list out of order: {pair:?}");
        }
    });
}
