//! Top-level error type for the `gitpr` command.

use thiserror::Error;

use crate::github::GitHubError;
use crate::store::StoreError;

/// Errors surfaced to the user by the command-line entry point.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Fetching from GitHub failed.
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    /// The record store rejected an operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Writing output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
