//! Error types for record store operations.

use thiserror::Error;

/// Errors returned by a [`PullRequestStore`](super::PullRequestStore).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A filter predicate failed; the scan was abandoned.
    #[error("filter predicate failed: {message}")]
    Predicate {
        /// Error detail reported by the predicate.
        message: String,
    },

    /// The backing store could not be reached. Never produced by the
    /// in-memory store.
    #[error("record store unavailable: {message}")]
    Unavailable {
        /// Error detail from the backing store.
        message: String,
    },
}
