//! The integer part of an order key.
//!
//! The integer part is a head letter followed by digits. The head encodes
//! how many characters the integer part has, so keys of different
//! magnitude still compare correctly as plain strings:
//!
//! | Head | Length | Digits |
//! |------|--------|--------|
//! | `A`  | 27     | 26     |
//! | `Z`  | 2      | 1      |
//! | `a`  | 2      | 1      |
//! | `z`  | 27     | 26     |
//!
//! Uppercase heads are the negative magnitudes and sort before the
//! lowercase ones. Incrementing `Zz...` rolls over to `a0`; `z` followed by
//! 26 maximal digits has no successor, and `A` followed by 26 zeros has no
//! predecessor.

use smallvec::SmallVec;

use crate::digits::Digits;
use crate::error::KeyError;
use crate::error::Result;

use super::split_chars;

/// Digit values of an integer part, head excluded.
type Values = SmallVec<[usize; 32]>;

/// Length of the integer part announced by a head character.
pub fn integer_length(head: char) -> Result<usize> {
    return match head {
        'a'..='z' => Ok(head as usize - 'a' as usize + 2),
        'A'..='Z' => Ok('Z' as usize - head as usize + 2),
        _ => Err(KeyError::InvalidHeadCharacter { head }),
    };
}

/// The integer-part prefix of a key.
pub fn integer_part(key: &str) -> Result<&str> {
    let Some(head) = key.chars().next() else {
        return Err(KeyError::InvalidOrderKey { key: key.to_string() });
    };
    let length = integer_length(head)?;
    return match split_chars(key, length) {
        Some((integer, _)) => Ok(integer),
        None => Err(KeyError::InvalidOrderKey { key: key.to_string() }),
    };
}

/// Check that an integer part is exactly as long as its head says.
pub fn validate_integer(integer: &str) -> Result<()> {
    let Some(head) = integer.chars().next() else {
        return Err(KeyError::InvalidIntegerPart { integer: integer.to_string() });
    };
    if integer.chars().count() != integer_length(head)? {
        return Err(KeyError::InvalidIntegerPart { integer: integer.to_string() });
    }
    return Ok(());
}

/// The next integer part, or `None` at the top of the key space.
pub fn increment_integer(integer: &str, digits: &Digits) -> Result<Option<String>> {
    let (head, mut values) = decompose(integer, digits)?;

    let mut carry = true;
    for value in values.iter_mut().rev() {
        if *value + 1 == digits.len() {
            *value = 0;
        } else {
            *value += 1;
            carry = false;
            break;
        }
    }
    if !carry {
        return Ok(Some(compose(head, &values, digits)));
    }

    // Every digit rolled over, so the head has to move.
    match head {
        'Z' => return Ok(Some(compose('a', &[0], digits))),
        'z' => return Ok(None),
        _ => {}
    }
    let next = char::from(head as u8 + 1);
    if next > 'a' {
        values.push(0);
    } else {
        values.pop();
    }
    return Ok(Some(compose(next, &values, digits)));
}

/// The previous integer part, or `None` at the bottom of the key space.
pub fn decrement_integer(integer: &str, digits: &Digits) -> Result<Option<String>> {
    let (head, mut values) = decompose(integer, digits)?;
    let max = digits.len() - 1;

    let mut borrow = true;
    for value in values.iter_mut().rev() {
        if *value == 0 {
            *value = max;
        } else {
            *value -= 1;
            borrow = false;
            break;
        }
    }
    if !borrow {
        return Ok(Some(compose(head, &values, digits)));
    }

    match head {
        'a' => return Ok(Some(compose('Z', &[max], digits))),
        'A' => return Ok(None),
        _ => {}
    }
    let prev = char::from(head as u8 - 1);
    if prev < 'Z' {
        values.push(max);
    } else {
        values.pop();
    }
    return Ok(Some(compose(prev, &values, digits)));
}

/// Split a validated integer part into its head and digit values.
fn decompose(integer: &str, digits: &Digits) -> Result<(char, Values)> {
    validate_integer(integer)?;
    let mut chars = integer.chars();
    let Some(head) = chars.next() else {
        return Err(KeyError::InvalidIntegerPart { integer: integer.to_string() });
    };
    let values = chars
        .map(|c| digits.value_of(c))
        .collect::<Result<Values>>()?;
    return Ok((head, values));
}

fn compose(head: char, values: &[usize], digits: &Digits) -> String {
    let mut out = String::with_capacity(values.len() + 1);
    out.push(head);
    out.extend(values.iter().map(|&v| digits.digit(v)));
    return out;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inc(integer: &str) -> Option<String> {
        return increment_integer(integer, Digits::base62()).unwrap();
    }

    fn dec(integer: &str) -> Option<String> {
        return decrement_integer(integer, Digits::base62()).unwrap();
    }

    #[test]
    fn head_lengths() {
        assert_eq!(integer_length('a'), Ok(2));
        assert_eq!(integer_length('b'), Ok(3));
        assert_eq!(integer_length('z'), Ok(27));
        assert_eq!(integer_length('Z'), Ok(2));
        assert_eq!(integer_length('Y'), Ok(3));
        assert_eq!(integer_length('A'), Ok(27));
        assert_eq!(
            integer_length('0'),
            Err(KeyError::InvalidHeadCharacter { head: '0' })
        );
        assert_eq!(
            integer_length('['),
            Err(KeyError::InvalidHeadCharacter { head: '[' })
        );
    }

    #[test]
    fn integer_part_slices_by_head() {
        assert_eq!(integer_part("a0"), Ok("a0"));
        assert_eq!(integer_part("a0V"), Ok("a0"));
        assert_eq!(integer_part("b125"), Ok("b12"));
        assert_eq!(integer_part("Xzzz"), Ok("Xzzz"));
    }

    #[test]
    fn integer_part_rejects_short_keys() {
        assert_eq!(
            integer_part("b1"),
            Err(KeyError::InvalidOrderKey { key: "b1".to_string() })
        );
        assert_eq!(
            integer_part(""),
            Err(KeyError::InvalidOrderKey { key: String::new() })
        );
        assert_eq!(
            integer_part("01"),
            Err(KeyError::InvalidHeadCharacter { head: '0' })
        );
    }

    #[test]
    fn validate_integer_checks_length() {
        assert!(validate_integer("a0").is_ok());
        assert!(validate_integer("Y00").is_ok());
        assert_eq!(
            validate_integer("a00"),
            Err(KeyError::InvalidIntegerPart { integer: "a00".to_string() })
        );
        assert_eq!(
            validate_integer("b0"),
            Err(KeyError::InvalidIntegerPart { integer: "b0".to_string() })
        );
    }

    #[test]
    fn increment_within_head() {
        assert_eq!(inc("a0").as_deref(), Some("a1"));
        assert_eq!(inc("a9").as_deref(), Some("aA"));
        assert_eq!(inc("b0z").as_deref(), Some("b10"));
        assert_eq!(inc("Xzzy").as_deref(), Some("Xzzz"));
    }

    #[test]
    fn increment_changes_head() {
        assert_eq!(inc("az").as_deref(), Some("b00"));
        assert_eq!(inc("bzz").as_deref(), Some("c000"));
        assert_eq!(inc("Yzz").as_deref(), Some("Z0"));
        assert_eq!(inc("Zz").as_deref(), Some("a0"));
    }

    #[test]
    fn increment_has_a_ceiling() {
        let top = format!("z{}", "z".repeat(26));
        assert_eq!(inc(&top), None);
    }

    #[test]
    fn decrement_within_head() {
        assert_eq!(dec("a1").as_deref(), Some("a0"));
        assert_eq!(dec("b10").as_deref(), Some("b0z"));
        assert_eq!(dec("Zz").as_deref(), Some("Zy"));
    }

    #[test]
    fn decrement_changes_head() {
        assert_eq!(dec("a0").as_deref(), Some("Zz"));
        assert_eq!(dec("Z0").as_deref(), Some("Yzz"));
        assert_eq!(dec("Y00").as_deref(), Some("Xzzz"));
        assert_eq!(dec("b00").as_deref(), Some("az"));
    }

    #[test]
    fn decrement_has_a_floor() {
        let bottom = format!("A{}", "0".repeat(26));
        assert_eq!(dec(&bottom), None);
    }

    #[test]
    fn other_bases() {
        let base10 = Digits::base10();
        assert_eq!(increment_integer("a9", base10).unwrap().as_deref(), Some("b00"));
        assert_eq!(decrement_integer("a0", base10).unwrap().as_deref(), Some("Z9"));

        let base95 = Digits::base95();
        assert_eq!(increment_integer("a~", base95).unwrap().as_deref(), Some("b  "));
        assert_eq!(increment_integer("Z~", base95).unwrap().as_deref(), Some("a "));
    }

    #[test]
    fn unknown_digits_are_rejected() {
        assert_eq!(
            increment_integer("a-", Digits::base62()),
            Err(KeyError::UnknownDigit { digit: '-' })
        );
        assert_eq!(
            decrement_integer("b-0", Digits::base62()),
            Err(KeyError::UnknownDigit { digit: '-' })
        );
    }

    #[test]
    fn malformed_integer_is_rejected_before_arithmetic() {
        assert_eq!(
            increment_integer("a00", Digits::base62()),
            Err(KeyError::InvalidIntegerPart { integer: "a00".to_string() })
        );
    }
}
