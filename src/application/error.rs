//! Application-level errors (wraps domain and provider errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::traits::ProviderError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Provider(#[from] ProviderError),

    #[error("query superseded: {query}")]
    Cancelled { query: String },

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    /// Failures of the lookup pipeline itself, shown to the user as one generic message.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, ApplicationError::Domain(_) | ApplicationError::Provider(_))
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
