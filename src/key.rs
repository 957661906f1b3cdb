//! Order keys and their validation.
//!
//! A key is an integer part followed by a fractional part. Keys are
//! compared as plain strings; nothing else is needed to sort them.

use std::borrow::Borrow;
use std::fmt;

use crate::digits::Digits;
use crate::error::KeyError;
use crate::error::Result;
use crate::generate::generate_key_between;
use crate::generate::generate_n_keys_between;
use crate::primitives::integer::integer_part;

/// Number of digits after the head in the longest integer parts.
pub(crate) const MAX_INTEGER_DIGITS: usize = 26;

/// Whether `s` is `A` followed by 26 zero digits, the smallest integer part.
///
/// A key consisting of only this integer part is reserved, because nothing
/// could ever be generated before it.
pub(crate) fn is_smallest_integer(s: &str, digits: &Digits) -> bool {
    let Some(rest) = s.strip_prefix('A') else {
        return false;
    };
    let zero = digits.zero();
    return rest.chars().count() == MAX_INTEGER_DIGITS && rest.chars().all(|c| c == zero);
}

/// Check that `key` is a well-formed order key under `digits`.
///
/// Rejects the reserved smallest key, keys whose head is not a letter,
/// keys shorter than their integer part, and keys whose fractional part
/// ends in the zero digit.
pub fn validate_order_key(key: &str, digits: &Digits) -> Result<()> {
    if is_smallest_integer(key, digits) {
        return Err(KeyError::InvalidOrderKey { key: key.to_string() });
    }
    let integer = integer_part(key)?;
    let fractional = &key[integer.len()..];
    if fractional.ends_with(digits.zero()) {
        return Err(KeyError::InvalidOrderKey { key: key.to_string() });
    }
    return Ok(());
}

/// A validated order key.
///
/// Ordering, equality and hashing are those of the underlying string.
/// Deserializing goes through [`TryFrom<String>`], which checks the
/// integer part but not the fractional digits, since those need an
/// alphabet.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct OrderKey(String);

impl OrderKey {
    /// Validate `key` against `digits` and wrap it.
    pub fn parse(key: impl Into<String>, digits: &Digits) -> Result<OrderKey> {
        let key = key.into();
        validate_order_key(&key, digits)?;
        return Ok(OrderKey(key));
    }

    /// The first key of an empty list.
    pub fn first(digits: &Digits) -> OrderKey {
        let mut key = String::with_capacity(2);
        key.push('a');
        key.push(digits.zero());
        return OrderKey(key);
    }

    /// A key strictly between `a` and `b`; `None` means the open end.
    pub fn between(a: Option<&OrderKey>, b: Option<&OrderKey>, digits: &Digits) -> Result<OrderKey> {
        let key = generate_key_between(a.map(OrderKey::as_str), b.map(OrderKey::as_str), digits)?;
        return Ok(OrderKey(key));
    }

    /// `n` increasing keys strictly between `a` and `b`.
    pub fn n_between(
        a: Option<&OrderKey>,
        b: Option<&OrderKey>,
        n: usize,
        digits: &Digits,
    ) -> Result<Vec<OrderKey>> {
        let keys = generate_n_keys_between(a.map(OrderKey::as_str), b.map(OrderKey::as_str), n, digits)?;
        return Ok(keys.into_iter().map(OrderKey).collect());
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        return &self.0;
    }

    /// Unwrap into the underlying string.
    pub fn into_string(self) -> String {
        return self.0;
    }

    /// The head letter and integer digits.
    pub fn integer_part(&self) -> &str {
        // Every constructor has already sliced the integer part once.
        return match integer_part(&self.0) {
            Ok(integer) => integer,
            Err(_) => &self.0,
        };
    }

    /// Everything after the integer part.
    pub fn fractional_part(&self) -> &str {
        return &self.0[self.integer_part().len()..];
    }
}

impl fmt::Debug for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "OrderKey({:?})", self.0);
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.0);
    }
}

impl AsRef<str> for OrderKey {
    fn as_ref(&self) -> &str {
        return &self.0;
    }
}

impl Borrow<str> for OrderKey {
    fn borrow(&self) -> &str {
        return &self.0;
    }
}

/// Wrap `key` after checking its head and length.
///
/// Use [`OrderKey::parse`] when the alphabet is known, which also rejects
/// trailing zero digits and the reserved smallest key.
impl TryFrom<String> for OrderKey {
    type Error = KeyError;

    fn try_from(key: String) -> Result<OrderKey> {
        integer_part(&key)?;
        return Ok(OrderKey(key));
    }
}

impl From<OrderKey> for String {
    fn from(key: OrderKey) -> String {
        return key.0;
    }
}
