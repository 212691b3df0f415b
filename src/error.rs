//! Almanac Errors
//!
//! The resolvers are pure functions of a timestamp, so the only failures
//! are malformed arguments. A day without an open jewel door is `None`,
//! never an error.

/// Errors raised by the almanac.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlmanacError {
    /// RNG bound must be a positive integer.
    #[error("Invalid bound {bound}: must be greater than zero")]
    InvalidBound {
        /// The rejected bound.
        bound: i64,
    },

    /// Timestamp could not be parsed or is outside the supported range.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Offsetting a timestamp overflowed the millisecond range.
    #[error("Timestamp overflow: {millis} ms offset by {delta_ms} ms")]
    TimestampOverflow {
        /// Starting instant in Unix milliseconds.
        millis: i64,
        /// Requested offset in milliseconds.
        delta_ms: i64,
    },

    /// Rule set identifier not recognised.
    #[error("Unknown rule set: {0}")]
    UnknownRuleSet(String),
}

/// Result alias used across the crate.
pub type AlmanacResult<T> = Result<T, AlmanacError>;
