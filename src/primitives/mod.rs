//! Building blocks for key generation.
//!
//! - `integer`: the self-describing integer part of a key
//! - `midpoint`: the shortest string between two fractional parts
//!
//! Both work on `char`s rather than bytes so that alphabets outside ASCII
//! behave the same way as the named ones.

pub mod integer;
pub mod midpoint;

/// Split `s` after its first `n` characters, or `None` if it is shorter.
pub(crate) fn split_chars(s: &str, n: usize) -> Option<(&str, &str)> {
    if n == 0 {
        return Some(("", s));
    }
    let mut seen = 0;
    for (offset, c) in s.char_indices() {
        seen += 1;
        if seen == n {
            return Some(s.split_at(offset + c.len_utf8()));
        }
    }
    return None;
}

/// Drop the first `n` characters of `s`, yielding `""` if it is shorter.
pub(crate) fn skip_chars(s: &str, n: usize) -> &str {
    return match split_chars(s, n) {
        Some((_, rest)) => rest,
        None => "",
    };
}
