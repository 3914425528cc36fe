//! Errors raised while searching.
//!
//! A base failing to satisfy the Goldbach analogue is never an error, it's a plain `false`. The
//! only failures are bad configurations and malformed input.

use thiserror::Error;

/// Error within the search.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A bound or base outside of its domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A rational that couldn't be parsed.
    #[error("invalid rational: {0}")]
    Parse(String),
}

/// Shorthand for results within the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds an [`Error::InvalidConfig`].
    pub(crate) fn config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
