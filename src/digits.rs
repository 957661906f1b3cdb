//! Digit alphabets.
//!
//! A digit alphabet fixes the base that order keys are written in. Both the
//! integer digits and the fractional digits of a key come from it; the head
//! letter of a key does not.
//!
//! Alphabets must be strictly ascending by code point so that comparing
//! digits as characters agrees with comparing them as numbers. This is
//! checked once at construction.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::error::KeyError;
use crate::error::Result;

/// `0-9`, then `A-Z`, then `a-z`. The default alphabet.
pub const BASE_62_DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Decimal digits.
pub const BASE_10_DIGITS: &str = "0123456789";

/// Every printable ASCII character, from space to `~`.
pub const BASE_95_DIGITS: &str = " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

static BASE_62: LazyLock<Digits> = LazyLock::new(|| Digits::from_ascending(BASE_62_DIGITS));
static BASE_10: LazyLock<Digits> = LazyLock::new(|| Digits::from_ascending(BASE_10_DIGITS));
static BASE_95: LazyLock<Digits> = LazyLock::new(|| Digits::from_ascending(BASE_95_DIGITS));

/// An ordered set of digit characters.
///
/// The first character is the zero digit. Lookups from character to digit
/// value are O(1).
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Digits {
    alphabet: String,
    chars: Vec<char>,
    index: FxHashMap<char, usize>,
}

impl Digits {
    /// Build an alphabet, rejecting ones that are too short or out of order.
    pub fn new(alphabet: &str) -> Result<Digits> {
        let chars: Vec<char> = alphabet.chars().collect();
        if chars.len() < 2 {
            return Err(KeyError::InvalidArgument {
                reason: format!("digit alphabet needs at least 2 characters, got {}", chars.len()),
            });
        }
        for pair in chars.windows(2) {
            if pair[0] == pair[1] {
                return Err(KeyError::InvalidArgument {
                    reason: format!("duplicate digit {:?} in alphabet", pair[0]),
                });
            }
            if pair[0] > pair[1] {
                return Err(KeyError::InvalidArgument {
                    reason: format!("digits {:?} and {:?} are not in ascending order", pair[0], pair[1]),
                });
            }
        }
        return Ok(Digits::from_ascending(alphabet));
    }

    /// Build an alphabet already known to be strictly ascending.
    fn from_ascending(alphabet: &str) -> Digits {
        let chars: Vec<char> = alphabet.chars().collect();
        let index = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        return Digits {
            alphabet: alphabet.to_string(),
            chars,
            index,
        };
    }

    /// The default base-62 alphabet.
    pub fn base62() -> &'static Digits {
        return &BASE_62;
    }

    /// The decimal alphabet.
    pub fn base10() -> &'static Digits {
        return &BASE_10;
    }

    /// The printable-ASCII alphabet.
    pub fn base95() -> &'static Digits {
        return &BASE_95;
    }

    /// Number of digits, i.e. the base.
    pub fn len(&self) -> usize {
        return self.chars.len();
    }

    /// Always false; alphabets hold at least two digits.
    pub fn is_empty(&self) -> bool {
        return self.chars.is_empty();
    }

    /// The smallest digit.
    pub fn zero(&self) -> char {
        return self.chars[0];
    }

    /// The largest digit.
    pub fn last(&self) -> char {
        return self.chars[self.chars.len() - 1];
    }

    /// The digit with the given value. Panics if `value >= self.len()`.
    pub fn digit(&self, value: usize) -> char {
        return self.chars[value];
    }

    /// The value of a digit character.
    pub fn value_of(&self, digit: char) -> Result<usize> {
        return self
            .index
            .get(&digit)
            .copied()
            .ok_or(KeyError::UnknownDigit { digit });
    }

    /// The alphabet as a string.
    pub fn as_str(&self) -> &str {
        return &self.alphabet;
    }
}

impl Default for Digits {
    fn default() -> Digits {
        return Digits::base62().clone();
    }
}

impl PartialEq for Digits {
    fn eq(&self, other: &Self) -> bool {
        return self.alphabet == other.alphabet;
    }
}

impl Eq for Digits {}

impl fmt::Debug for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "Digits({:?})", self.alphabet);
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.alphabet);
    }
}

impl FromStr for Digits {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Digits> {
        return Digits::new(s);
    }
}

impl TryFrom<String> for Digits {
    type Error = KeyError;

    fn try_from(alphabet: String) -> Result<Digits> {
        return Digits::new(&alphabet);
    }
}

impl From<Digits> for String {
    fn from(digits: Digits) -> String {
        return digits.alphabet;
    }
}
