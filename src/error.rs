//! Error types for lexdawg.
//!
//! Lookups never fail: a missing word or prefix is reported as `false` or an
//! empty result. The only recoverable error is a malformed wildcard pattern.

use thiserror::Error;

/// Errors returned by graph queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DawgError {
    /// A wildcard pattern used a symbol that is neither a wildcard nor part of
    /// the graph's alphabet.
    #[error("invalid wildcard pattern: symbol {symbol} at position {position} is not in the alphabet")]
    InvalidPattern {
        /// Index of the offending symbol in the pattern.
        position: usize,
        /// Debug rendering of the offending symbol.
        symbol: String,
    },
}

impl DawgError {
    pub(crate) fn invalid_pattern<T: std::fmt::Debug>(position: usize, symbol: &T) -> Self {
        DawgError::InvalidPattern {
            position,
            symbol: format!("{symbol:?}"),
        }
    }
}

/// Result type alias for lexdawg operations.
pub type Result<T> = std::result::Result<T, DawgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_message() {
        let err = DawgError::invalid_pattern(0, &'#');
        assert_eq!(
            err.to_string(),
            "invalid wildcard pattern: symbol '#' at position 0 is not in the alphabet"
        );
    }
}
