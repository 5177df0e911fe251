use thiserror::Error;

use catalog_core::DomainError;

use crate::repository::RepositoryError;

pub type AppResult<T> = Result<T, AppError>;

/// Failure while serving a request through the mediator.
///
/// "Not found" is deliberately absent: handlers report a missing product through
/// their return value (`false` / `None`).
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad input rejected by request-shape checks or entity invariants.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The backing store failed; propagated unchanged, never retried.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("no handler registered for {0}")]
    HandlerNotFound(&'static str),

    #[error("handler already registered for {0}")]
    AlreadyRegistered(&'static str),

    #[error("type mismatch while dispatching {0}")]
    TypeMismatch(&'static str),
}

impl AppError {
    /// Whether the caller sent something invalid (as opposed to a server-side failure).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_client_error())
    }
}
