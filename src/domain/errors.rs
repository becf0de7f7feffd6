//! Domain-level failures for storage and code assignment.
//!
//! These are converted to HTTP responses at the API boundary via
//! [`crate::error::AppError`].

use thiserror::Error;

/// Failures of the durable mapping store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The durable medium exists but could not be read.
    #[error("failed to read mapping store: {0}")]
    Read(String),

    /// The durable medium holds data that is not a valid mapping set.
    /// Nothing is written after this error.
    #[error("mapping store is corrupt: {0}")]
    Corrupt(String),

    /// The new snapshot could not be persisted. The previous state is intact.
    #[error("failed to write mapping store: {0}")]
    Write(String),
}

impl StoreError {
    /// Short name of the failure, safe to show to clients.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Read(_) => "read",
            StoreError::Corrupt(_) => "corrupt",
            StoreError::Write(_) => "write",
        }
    }
}

/// Failures of [`crate::application::services::LinkService::assign`].
#[derive(Debug, Error)]
pub enum AssignError {
    #[error("target URL must not be empty")]
    EmptyTarget,

    /// The caller-supplied custom code is already bound.
    #[error("short code '{0}' is already taken")]
    CodeAlreadyTaken(String),

    /// Every random draw collided with an existing code.
    #[error("no free short code found after {0} attempts")]
    CodeSpaceExhausted(usize),

    #[error(transparent)]
    Store(#[from] StoreError),
}
