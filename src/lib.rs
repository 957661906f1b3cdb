//! Fracdex - order keys for lists that are edited concurrently.
//!
//! An order key is a string whose plain lexicographic order is the
//! position of an item in a list. New keys can always be generated between
//! two existing ones, so moving or inserting an item never renumbers its
//! neighbours. This makes the keys a good fit for replicated lists and
//! lazily synced tables.
//!
//! # Quick Start
//!
//! ```
//! use fracdex::{key_between, n_keys_between};
//!
//! let first = key_between(None, None).unwrap();
//! let last = key_between(Some(first.as_str()), None).unwrap();
//! let middle = key_between(Some(first.as_str()), Some(last.as_str())).unwrap();
//! assert!(first < middle && middle < last);
//!
//! let batch = n_keys_between(Some(first.as_str()), Some(middle.as_str()), 3).unwrap();
//! assert_eq!(batch.len(), 3);
//! ```
//!
//! # Key layout
//!
//! | Part | Example | Meaning |
//! |------|---------|---------|
//! | Head | `b` | Length of the integer part (`a` = 2, `b` = 3, `Z` = 2, `Y` = 3) |
//! | Integer digits | `12` | Magnitude, in the digit alphabet |
//! | Fraction | `5` | Position between neighbouring integers, never ending in zero |
//!
//! # Alphabets
//!
//! Any strictly ascending set of at least two characters can be used as
//! the digit alphabet; see [`Digits`]. The base-62 alphabet is the default.
//! Keys generated with one alphabet must only be compared with keys from
//! the same alphabet.
//!
//! # Non-goals
//!
//! Two replicas that generate a key between the same neighbours at the
//! same time get the same key. Breaking that tie (for example by appending
//! a replica id) is up to the caller.

pub mod digits;
pub mod error;
pub mod generate;
pub mod key;
pub mod primitives;

pub use digits::BASE_10_DIGITS;
pub use digits::BASE_62_DIGITS;
pub use digits::BASE_95_DIGITS;
pub use digits::Digits;
pub use error::Direction;
pub use error::KeyError;
pub use error::Result;
pub use generate::generate_key_between;
pub use generate::generate_n_keys_between;
pub use generate::key_between;
pub use generate::n_keys_between;
pub use key::OrderKey;
pub use key::validate_order_key;
