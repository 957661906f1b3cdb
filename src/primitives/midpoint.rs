//! Shortest string strictly between two fractional parts.
//!
//! Fractional parts are read as digit strings after an implied radix
//! point, so `""` is zero and `"V"` in base 62 is one half. Trailing zero
//! digits are never produced and never accepted, which keeps every value
//! with exactly one spelling.

use crate::digits::Digits;
use crate::error::KeyError;
use crate::error::Result;

use super::skip_chars;
use super::split_chars;

/// A string `m` with `a < m` and, if `b` is given, `m < b`.
///
/// `a` may be empty. `b`, when present, must be non-empty and sort after
/// `a`. Neither may end in the zero digit.
pub fn midpoint(a: &str, b: Option<&str>, digits: &Digits) -> Result<String> {
    if let Some(b) = b {
        if a >= b {
            return Err(KeyError::OrderingViolation {
                a: a.to_string(),
                b: b.to_string(),
            });
        }
    }
    let zero = digits.zero();
    for s in std::iter::once(a).chain(b) {
        if s.ends_with(zero) {
            return Err(KeyError::InvalidOrderKey { key: s.to_string() });
        }
    }

    let mut out = String::new();
    push_midpoint(a, b, digits, &mut out)?;
    return Ok(out);
}

fn push_midpoint(a: &str, b: Option<&str>, digits: &Digits, out: &mut String) -> Result<()> {
    let zero = digits.zero();

    if let Some(b) = b {
        // `a` is padded with zeros; `b` cannot run out first while the two
        // agree, since that would make `a >= b`.
        let common = b
            .chars()
            .zip(a.chars().chain(std::iter::repeat(zero)))
            .take_while(|(x, y)| x == y)
            .count();
        if common > 0 {
            if let Some((prefix, b_rest)) = split_chars(b, common) {
                out.push_str(prefix);
                return push_midpoint(skip_chars(a, common), Some(b_rest), digits, out);
            }
        }
    }

    // The first digits (or the lack of one) now differ.
    let digit_a = match a.chars().next() {
        Some(c) => digits.value_of(c)?,
        None => 0,
    };
    let first_b = b.and_then(|b| b.chars().next());
    let digit_b = match first_b {
        Some(c) => digits.value_of(c)?,
        None => digits.len(),
    };

    if digit_b > digit_a + 1 {
        out.push(digits.digit((digit_a + digit_b + 1) / 2));
        return Ok(());
    }

    // Consecutive digits. If `b` is longer than one digit, its first digit
    // alone already sorts below it.
    if let (Some(b), Some(first)) = (b, first_b) {
        if b.chars().nth(1).is_some() {
            out.push(first);
            return Ok(());
        }
    }

    // Otherwise keep `a`'s digit and look for room after it, e.g. between
    // "49" and "5" the answer is "4" followed by something above "9".
    out.push(digits.digit(digit_a));
    return push_midpoint(skip_chars(a, 1), None, digits, out);
}
