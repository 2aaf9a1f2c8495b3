//! Error types for gavel.

use thiserror::Error;

use crate::moderation::InvalidTransition;

/// Common error type for moderation operations.
#[derive(Error, Debug)]
pub enum GavelError {
    /// Permission denied.
    ///
    /// Carries the localized denial reason so the caller can show it to
    /// the user as-is.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Ledger transition attempted from the wrong state.
    ///
    /// This is a programmer-error signal (a check/apply desynchronization),
    /// not a user-facing permission message.
    #[error("invalid state transition: {0}")]
    Transition(#[from] InvalidTransition),

    /// Content store error.
    ///
    /// Generic wrapper for errors from any storage backend.
    #[error("storage error: {0}")]
    Storage(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gavel operations.
pub type Result<T> = std::result::Result<T, GavelError>;
