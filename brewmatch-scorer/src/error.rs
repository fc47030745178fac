//! Error types raised by swipe sessions.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when a [`SwipeSession`](crate::SwipeSession) is used out
/// of order.
///
/// Neither variant is fatal: the session is left untouched, so callers can
/// ignore the error or start a fresh session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwipeError {
    /// A decision arrived after every drink had been decided.
    #[error("swipe session already finished after {decided} decisions")]
    Finished {
        /// Number of decisions the session accepted.
        decided: usize,
    },
    /// A result was requested while drinks were still undecided.
    #[error("swipe session still has {remaining} drinks to decide")]
    Active {
        /// Drinks left before the session finishes.
        remaining: usize,
    },
}

/// Error returned when a string names no known decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown swipe decision '{input}' (expected 'like' or 'pass')")]
pub struct ParseDecisionError {
    /// Rejected input.
    pub input: String,
}
