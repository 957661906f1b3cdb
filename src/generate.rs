//! Generating keys between bounds.
//!
//! `None` as a lower bound means the start of the list and `None` as an
//! upper bound means its end. Whenever possible a key that differs only in
//! its integer part is returned, since those stay short; fractional digits
//! are added only when two keys share an integer part or when the integer
//! space has run out.

use crate::digits::Digits;
use crate::error::Direction;
use crate::error::KeyError;
use crate::error::Result;
use crate::key::is_smallest_integer;
use crate::key::validate_order_key;
use crate::primitives::integer::decrement_integer;
use crate::primitives::integer::increment_integer;
use crate::primitives::integer::integer_part;
use crate::primitives::midpoint::midpoint;

/// A key strictly between `a` and `b` using the base-62 alphabet.
pub fn key_between(a: Option<&str>, b: Option<&str>) -> Result<String> {
    return generate_key_between(a, b, Digits::base62());
}

/// `n` increasing keys strictly between `a` and `b` using the base-62 alphabet.
pub fn n_keys_between(a: Option<&str>, b: Option<&str>, n: usize) -> Result<Vec<String>> {
    return generate_n_keys_between(a, b, n, Digits::base62());
}

/// A key strictly between `a` and `b`.
///
/// Both bounds are validated first, and must satisfy `a < b` when both are
/// present. The result is deterministic and as short as the key space
/// allows.
///
/// ```
/// use fracdex::{generate_key_between, Digits};
///
/// let digits = Digits::base62();
/// let first = generate_key_between(None, None, digits).unwrap();
/// assert_eq!(first, "a0");
///
/// let second = generate_key_between(Some(first.as_str()), None, digits).unwrap();
/// assert_eq!(second, "a1");
///
/// let middle = generate_key_between(Some(first.as_str()), Some(second.as_str()), digits).unwrap();
/// assert_eq!(middle, "a0V");
/// ```
pub fn generate_key_between(a: Option<&str>, b: Option<&str>, digits: &Digits) -> Result<String> {
    tracing::trace!(?a, ?b, digits = digits.as_str(), "generating key");

    if let Some(a) = a {
        validate_order_key(a, digits)?;
    }
    if let Some(b) = b {
        validate_order_key(b, digits)?;
    }

    return match (a, b) {
        (None, None) => {
            let mut key = String::with_capacity(2);
            key.push('a');
            key.push(digits.zero());
            Ok(key)
        }
        (None, Some(b)) => before(b, digits),
        (Some(a), None) => after(a, digits),
        (Some(a), Some(b)) => {
            if a >= b {
                return Err(KeyError::OrderingViolation {
                    a: a.to_string(),
                    b: b.to_string(),
                });
            }
            between(a, b, digits)
        }
    };
}

fn before(b: &str, digits: &Digits) -> Result<String> {
    let ib = integer_part(b)?;
    let fb = &b[ib.len()..];
    if is_smallest_integer(ib, digits) {
        return Ok(format!("{ib}{}", midpoint("", Some(fb), digits)?));
    }
    if ib < b {
        return Ok(ib.to_string());
    }
    return match decrement_integer(ib, digits)? {
        // The smallest integer part is reserved as a key on its own.
        Some(key) if is_smallest_integer(&key, digits) => Ok(format!("{key}{}", midpoint("", None, digits)?)),
        Some(key) => Ok(key),
        None => {
            tracing::debug!(key = b, "no integer part below key");
            Err(KeyError::RangeExhausted { direction: Direction::Decrement })
        }
    };
}

fn after(a: &str, digits: &Digits) -> Result<String> {
    let ia = integer_part(a)?;
    let fa = &a[ia.len()..];
    if let Some(key) = increment_integer(ia, digits)? {
        return Ok(key);
    }
    tracing::debug!(key = a, "integer part exhausted, extending fractional part");
    return Ok(format!("{ia}{}", midpoint(fa, None, digits)?));
}

fn between(a: &str, b: &str, digits: &Digits) -> Result<String> {
    let ia = integer_part(a)?;
    let fa = &a[ia.len()..];
    let ib = integer_part(b)?;
    let fb = &b[ib.len()..];
    if ia == ib {
        return Ok(format!("{ia}{}", midpoint(fa, Some(fb), digits)?));
    }
    let Some(i) = increment_integer(ia, digits)? else {
        tracing::debug!(a, b, "no integer part above lower bound");
        return Err(KeyError::RangeExhausted { direction: Direction::Increment });
    };
    if i.as_str() < b {
        return Ok(i);
    }
    return Ok(format!("{ia}{}", midpoint(fa, None, digits)?));
}

/// `n` strictly increasing keys, all strictly between `a` and `b`.
///
/// With one open bound the keys are consecutive integer parts walking away
/// from the closed bound. With both bounds present the range is split
/// recursively, which keeps the keys short.
///
/// ```
/// use fracdex::{generate_n_keys_between, Digits};
///
/// let keys = generate_n_keys_between(None, None, 5, Digits::base10()).unwrap();
/// assert_eq!(keys, vec!["a0", "a1", "a2", "a3", "a4"]);
/// ```
pub fn generate_n_keys_between(
    a: Option<&str>,
    b: Option<&str>,
    n: usize,
    digits: &Digits,
) -> Result<Vec<String>> {
    tracing::trace!(?a, ?b, n, digits = digits.as_str(), "generating keys");

    let mut out = Vec::with_capacity(n);
    push_n_keys_between(a, b, n, digits, &mut out)?;
    return Ok(out);
}

fn push_n_keys_between(
    a: Option<&str>,
    b: Option<&str>,
    n: usize,
    digits: &Digits,
    out: &mut Vec<String>,
) -> Result<()> {
    if n == 0 {
        return Ok(());
    }
    if n == 1 {
        out.push(generate_key_between(a, b, digits)?);
        return Ok(());
    }

    match (a, b) {
        (_, None) => {
            let mut c = generate_key_between(a, None, digits)?;
            for _ in 1..n {
                let next = generate_key_between(Some(c.as_str()), None, digits)?;
                out.push(std::mem::replace(&mut c, next));
            }
            out.push(c);
        }
        (None, Some(b)) => {
            let start = out.len();
            let mut c = generate_key_between(None, Some(b), digits)?;
            for _ in 1..n {
                let next = generate_key_between(None, Some(c.as_str()), digits)?;
                out.push(std::mem::replace(&mut c, next));
            }
            out.push(c);
            out[start..].reverse();
        }
        (Some(a), Some(b)) => {
            let mid = n / 2;
            let c = generate_key_between(Some(a), Some(b), digits)?;
            push_n_keys_between(Some(a), Some(c.as_str()), mid, digits, out)?;
            out.push(c.clone());
            push_n_keys_between(Some(c.as_str()), Some(b), n - mid - 1, digits, out)?;
        }
    }
    return Ok(());
}
