//! Errors raised while validating or generating order keys.
//!
//! Every error is a rejection of malformed input or of an exhausted key
//! range. None are transient: the same input always fails the same way.

use std::fmt;

/// Which end of the key space ran out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// There is no integer part above the largest one.
    Increment,
    /// There is no integer part below the smallest one.
    Decrement,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Direction::Increment => write!(f, "increment"),
            Direction::Decrement => write!(f, "decrement"),
        };
    }
}

/// Errors returned by key validation and generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// The first character of a key is not one of `A..Z` or `a..z`.
    #[error("invalid order key head: {head}")]
    InvalidHeadCharacter {
        /// The offending head character.
        head: char,
    },

    /// The integer part is not as long as its head says it should be.
    #[error("invalid integer part of order key: {integer}")]
    InvalidIntegerPart {
        /// The malformed integer part.
        integer: String,
    },

    /// The key is truncated, ends in the zero digit, or is the reserved sentinel.
    #[error("invalid order key: {key}")]
    InvalidOrderKey {
        /// The rejected key.
        key: String,
    },

    /// Both bounds were given but the lower one does not sort first.
    #[error("{a} >= {b}")]
    OrderingViolation {
        /// Lower bound.
        a: String,
        /// Upper bound.
        b: String,
    },

    /// The integer part has no successor or predecessor.
    #[error("cannot {direction} any more")]
    RangeExhausted {
        /// The direction that ran out.
        direction: Direction,
    },

    /// A key contains a character that is not part of the digit alphabet.
    #[error("digit not in alphabet: {digit:?}")]
    UnknownDigit {
        /// The unrecognised character.
        digit: char,
    },

    /// A caller-supplied argument is malformed.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with it.
        reason: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KeyError>;
