//! Errors returned by fallible `TimeMap` operations.

use thiserror::Error;

use crate::interval::IntervalId;

/// Errors returned by [`TimeMap`](crate::TimeMap) mutations.
///
/// None of these leave the map in a different state than before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeMapError {
    /// Both bounds were given and the end lies before the start.
    #[error("invalid interval: end time cannot be before start time")]
    InvalidRange,

    /// The reserved zero identifier was passed for removal.
    #[error("invalid interval id: cannot be zero")]
    InvalidIdentifier,

    /// No live interval carries this identifier.
    #[error("interval id not found: {0}")]
    NotFound(IntervalId),
}

/// Result alias for `TimeMap` operations.
pub type Result<T> = std::result::Result<T, TimeMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            TimeMapError::InvalidRange.to_string(),
            "invalid interval: end time cannot be before start time",
        );
        assert_eq!(
            TimeMapError::InvalidIdentifier.to_string(),
            "invalid interval id: cannot be zero",
        );
        assert_eq!(
            TimeMapError::NotFound(IntervalId::from(7)).to_string(),
            "interval id not found: 7",
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<TimeMapError>();
    }
}
