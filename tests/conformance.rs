//! Reference cases for key generation.
//!
//! Each table row is `(a, b, expected)`, where `expected` is either the
//! generated key or the error message. The same cases are used by other
//! fractional indexing libraries, so keys stored by them remain valid
//! neighbours for keys generated here.

use fracdex::{generate_key_between, generate_n_keys_between, Digits, KeyError};

fn check(digits: &Digits, a: Option<&str>, b: Option<&str>, expected: Result<&str, &str>) {
    let actual = generate_key_between(a, b, digits);
    match (actual, expected) {
        (Ok(key), Ok(want)) => assert_eq!(key, want, "between {a:?} and {b:?}"),
        (Err(err), Err(want)) => assert_eq!(err.to_string(), want, "between {a:?} and {b:?}"),
        (actual, expected) => panic!("between {a:?} and {b:?}: got {actual:?}, expected {expected:?}"),
    }
}

fn check_n(digits: &Digits, a: Option<&str>, b: Option<&str>, n: usize, expected: &str) {
    let keys = generate_n_keys_between(a, b, n, digits).unwrap();
    assert_eq!(keys.join(" "), expected, "{n} keys between {a:?} and {b:?}");
}

// =============================================================================
// Base 62
// =============================================================================

#[test]
fn base62_keys() {
    let digits = Digits::base62();
    let cases: &[(Option<&str>, Option<&str>, &str)] = &[
        (None, None, "a0"),
        (None, Some("a0"), "Zz"),
        (None, Some("Zz"), "Zy"),
        (Some("a0"), None, "a1"),
        (Some("a1"), None, "a2"),
        (Some("a0"), Some("a1"), "a0V"),
        (Some("a1"), Some("a2"), "a1V"),
        (Some("a0V"), Some("a1"), "a0l"),
        (Some("Zz"), Some("a0"), "ZzV"),
        (Some("Zz"), Some("a1"), "a0"),
        (None, Some("Y00"), "Xzzz"),
        (Some("bzz"), None, "c000"),
        (Some("a0"), Some("a0V"), "a0G"),
        (Some("a0"), Some("a0G"), "a08"),
        (Some("b125"), Some("b129"), "b127"),
        (Some("a0"), Some("a1V"), "a1"),
        (Some("Zz"), Some("a01"), "a0"),
        (None, Some("a0V"), "a0"),
        (None, Some("b999"), "b99"),
        (None, Some("A000000000000000000000000001"), "A000000000000000000000000000V"),
        (Some("zzzzzzzzzzzzzzzzzzzzzzzzzzy"), None, "zzzzzzzzzzzzzzzzzzzzzzzzzzz"),
        (Some("zzzzzzzzzzzzzzzzzzzzzzzzzzz"), None, "zzzzzzzzzzzzzzzzzzzzzzzzzzzV"),
    ];
    for &(a, b, expected) in cases {
        check(digits, a, b, Ok(expected));
    }
}

#[test]
fn base62_rejections() {
    let digits = Digits::base62();
    let cases: &[(Option<&str>, Option<&str>, &str)] = &[
        (None, Some("A00000000000000000000000000"), "invalid order key: A00000000000000000000000000"),
        (Some("a00"), None, "invalid order key: a00"),
        (Some("a00"), Some("a1"), "invalid order key: a00"),
        (Some("0"), Some("1"), "invalid order key head: 0"),
        (Some("a1"), Some("a0"), "a1 >= a0"),
    ];
    for &(a, b, expected) in cases {
        check(digits, a, b, Err(expected));
    }
}

#[test]
fn rejections_carry_the_error_kind() {
    let digits = Digits::base62();
    assert!(matches!(
        generate_key_between(None, Some("A00000000000000000000000000"), digits),
        Err(KeyError::InvalidOrderKey { .. })
    ));
    assert!(matches!(
        generate_key_between(Some("0"), None, digits),
        Err(KeyError::InvalidHeadCharacter { head: '0' })
    ));
    assert!(matches!(
        generate_key_between(Some("a1"), Some("a0"), digits),
        Err(KeyError::OrderingViolation { .. })
    ));
}

// =============================================================================
// Bulk generation (base 10)
// =============================================================================

#[test]
fn base10_bulk() {
    let digits = Digits::base10();
    check_n(digits, None, None, 5, "a0 a1 a2 a3 a4");
    check_n(digits, Some("a4"), None, 10, "a5 a6 a7 a8 a9 b00 b01 b02 b03 b04");
    check_n(digits, None, Some("a0"), 5, "Z5 Z6 Z7 Z8 Z9");
    check_n(
        digits,
        Some("a0"),
        Some("a2"),
        20,
        "a01 a02 a03 a035 a04 a05 a06 a07 a08 a09 a1 a11 a12 a13 a14 a15 a16 a17 a18 a19",
    );
}

#[test]
fn bulk_zero_is_empty() {
    let keys = generate_n_keys_between(Some("a0"), Some("a1"), 0, Digits::base62()).unwrap();
    assert!(keys.is_empty());
}

#[test]
fn bulk_validates_bounds() {
    let result = generate_n_keys_between(Some("a1"), Some("a0"), 3, Digits::base62());
    assert!(matches!(result, Err(KeyError::OrderingViolation { .. })));
}

// =============================================================================
// Base 95
// =============================================================================

#[test]
fn base95_keys() {
    let digits = Digits::base95();
    let cases: &[(Option<&str>, Option<&str>, &str)] = &[
        (Some("a00"), Some("a01"), "a00P"),
        (Some("a0/"), Some("a00"), "a0/P"),
        (None, None, "a "),
        (Some("a "), None, "a!"),
        (None, Some("a "), "Z~"),
        (None, Some("A                          0"), "A                          ("),
        (Some("a~"), None, "b  "),
        (Some("Z~"), None, "a "),
        (Some("a0"), Some("a0V"), "a0;"),
        (Some("a  1"), Some("a  2"), "a  1P"),
    ];
    for &(a, b, expected) in cases {
        check(digits, a, b, Ok(expected));
    }
}

#[test]
fn base95_rejections() {
    let digits = Digits::base95();
    let cases: &[(Option<&str>, Option<&str>, &str)] = &[
        (Some("a0 "), Some("a0!"), "invalid order key: a0 "),
        (Some("b   "), None, "invalid order key: b   "),
        (None, Some("A                          "), "invalid order key: A                          "),
    ];
    for &(a, b, expected) in cases {
        check(digits, a, b, Err(expected));
    }
}
