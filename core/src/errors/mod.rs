//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// Each variant corresponds to one of the failure kinds the API layer
/// reports: caller input (400), server misconfiguration (500), and
/// upstream provider faults (500). A below-threshold score is not an
/// error and never appears here.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Provider error: {message}")]
    Provider { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
