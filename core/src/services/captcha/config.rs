//! Configuration for the verification service

use vc_shared::config::captcha::{CaptchaConfig, DEFAULT_SCORE_THRESHOLD};

/// Configuration injected into the verification service
///
/// The secret is carried here rather than read from the process
/// environment inside the handler, so tests can exercise the
/// missing-secret path without mutating env state.
#[derive(Debug, Clone)]
pub struct CaptchaServiceConfig {
    /// Shared secret for the provider's verification API
    pub secret_key: Option<String>,
    /// Minimum score required to accept a verification
    pub score_threshold: f64,
}

impl CaptchaServiceConfig {
    /// Create a config with a secret and the default threshold
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret_key: Some(secret.into()),
            score_threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }
}

impl Default for CaptchaServiceConfig {
    fn default() -> Self {
        Self {
            secret_key: None,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }
}

impl From<&CaptchaConfig> for CaptchaServiceConfig {
    fn from(config: &CaptchaConfig) -> Self {
        Self {
            secret_key: config.secret_key.clone(),
            score_threshold: config.score_threshold,
        }
    }
}
