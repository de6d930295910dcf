//! Captcha verification configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Google's fixed siteverify endpoint
pub const DEFAULT_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Minimum score required to accept a verification
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.5;

/// Default timeout for the outbound siteverify call, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Captcha provider configuration
///
/// Loaded once at process start and injected into the verification
/// service, so handlers never read the environment directly.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptchaConfig {
    /// Shared secret for the siteverify API. Absence is a per-request
    /// configuration fault, not a startup failure.
    pub secret_key: Option<String>,
    /// Minimum score required to accept a verification
    pub score_threshold: f64,
    /// Verification endpoint URL
    pub verify_url: String,
    /// Timeout for the outbound verification call, in seconds
    pub request_timeout_secs: u64,
    /// Provider selector ("google" or "mock")
    pub provider: String,
}

impl CaptchaConfig {
    /// Load captcha configuration from environment variables
    ///
    /// Reads `RECAPTCHA_SECRET_KEY`, `RECAPTCHA_SCORE_THRESHOLD`,
    /// `RECAPTCHA_VERIFY_URL`, `RECAPTCHA_TIMEOUT_SECS` and
    /// `CAPTCHA_PROVIDER`, falling back to defaults for everything but
    /// the secret.
    pub fn from_env() -> Self {
        let secret_key = env::var("RECAPTCHA_SECRET_KEY")
            .ok()
            .filter(|s| !s.is_empty());

        Self {
            secret_key,
            score_threshold: env::var("RECAPTCHA_SCORE_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SCORE_THRESHOLD),
            verify_url: env::var("RECAPTCHA_VERIFY_URL")
                .unwrap_or_else(|_| DEFAULT_VERIFY_URL.to_string()),
            request_timeout_secs: env::var("RECAPTCHA_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            provider: env::var("CAPTCHA_PROVIDER").unwrap_or_else(|_| "google".to_string()),
        }
    }
}

impl Default for CaptchaConfig {
    fn default() -> Self {
        Self {
            secret_key: None,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            verify_url: DEFAULT_VERIFY_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            provider: "google".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CaptchaConfig::default();
        assert!(config.secret_key.is_none());
        assert_eq!(config.score_threshold, DEFAULT_SCORE_THRESHOLD);
        assert_eq!(config.verify_url, DEFAULT_VERIFY_URL);
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.provider, "google");
    }

    // Single test so the env mutations don't race each other under the
    // parallel test runner.
    #[test]
    fn test_from_env() {
        env::set_var("RECAPTCHA_SECRET_KEY", "test-secret");
        env::set_var("RECAPTCHA_SCORE_THRESHOLD", "0.7");
        env::set_var("RECAPTCHA_TIMEOUT_SECS", "5");
        env::set_var("CAPTCHA_PROVIDER", "mock");

        let config = CaptchaConfig::from_env();
        assert_eq!(config.secret_key.as_deref(), Some("test-secret"));
        assert_eq!(config.score_threshold, 0.7);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.provider, "mock");

        // An empty secret counts as absent
        env::set_var("RECAPTCHA_SECRET_KEY", "");
        assert!(CaptchaConfig::from_env().secret_key.is_none());

        // Unparseable threshold falls back to the default
        env::set_var("RECAPTCHA_SCORE_THRESHOLD", "not-a-number");
        assert_eq!(
            CaptchaConfig::from_env().score_threshold,
            DEFAULT_SCORE_THRESHOLD
        );

        env::remove_var("RECAPTCHA_SECRET_KEY");
        env::remove_var("RECAPTCHA_SCORE_THRESHOLD");
        env::remove_var("RECAPTCHA_TIMEOUT_SECS");
        env::remove_var("CAPTCHA_PROVIDER");
    }
}
