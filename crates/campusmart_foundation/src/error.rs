//! Shared error types.
//!
//! The store itself signals absence with `Option`, never an error; the only
//! fallible surface is parsing domain enums from their wire strings.

use thiserror::Error;

/// Error returned when a domain-enum wire string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {what}: {value:?}")]
pub struct ParseError {
    /// Human name of the value being parsed, e.g. `"order status"`.
    pub what: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseError {
    /// Creates a parse error for the named value kind.
    #[must_use]
    pub fn new(what: &'static str, value: impl Into<String>) -> Self {
        Self {
            what,
            value: value.into(),
        }
    }
}
