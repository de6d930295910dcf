//! # Infrastructure Layer
//!
//! Concrete implementations of the external services the verify-captcha
//! backend depends on. The domain layer only knows the
//! `CaptchaProviderTrait` seam; this crate supplies the Google
//! `siteverify` HTTP client behind it, plus a mock provider for
//! development and testing.

/// Captcha provider module - external verification services
pub mod captcha;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Captcha provider error
    #[error("Captcha provider error: {0}")]
    Captcha(String),
}
