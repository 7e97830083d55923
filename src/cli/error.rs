//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::cli::render::RenderError;
use crate::infrastructure::{InfraError, ProviderError};

/// Message shown for every failed species lookup.
pub const LOOKUP_FAILED_MESSAGE: &str = "could not find the requested species, try again";

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    fn application(&self) -> Option<&ApplicationError> {
        match self {
            CliError::Infra(InfraError::Application(e)) => Some(e),
            _ => None,
        }
    }

    /// Lookup failures (not found, network, bad response) collapse into one message.
    pub fn is_lookup_failure(&self) -> bool {
        self.application()
            .is_some_and(ApplicationError::is_lookup_failure)
    }

    /// Text shown to the user; details go to the debug log.
    pub fn user_message(&self) -> String {
        if self.is_lookup_failure() {
            LOOKUP_FAILED_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Render(_) => crate::exitcode::SOFTWARE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(e) => match e {
                    ApplicationError::Domain(_) => crate::exitcode::NOINPUT,
                    ApplicationError::Provider(p) => match p {
                        ProviderError::NotFound(_) => crate::exitcode::NOINPUT,
                        ProviderError::Status { .. } | ProviderError::Transport(_) => {
                            crate::exitcode::UNAVAILABLE
                        }
                        ProviderError::Malformed { .. } => crate::exitcode::DATAERR,
                    },
                    ApplicationError::Cancelled { .. } => crate::exitcode::SOFTWARE,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                },
            },
        }
    }
}
