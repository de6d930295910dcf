//! Google reCAPTCHA siteverify client
//!
//! Implements the provider seam with a single form-encoded POST to
//! Google's verification endpoint. The call carries a bounded timeout
//! and is never retried; any transport failure, non-2xx status, or
//! unparseable body surfaces as a provider fault.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

use vc_core::services::captcha::{CaptchaProviderTrait, ProviderVerdict};
use vc_shared::config::CaptchaConfig;

use crate::InfrastructureError;

/// Google siteverify response payload
#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    challenge_ts: Option<String>,
    #[serde(default)]
    hostname: Option<String>,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

/// Google reCAPTCHA v3 verification client
pub struct GoogleCaptchaService {
    client: reqwest::Client,
    verify_url: String,
}

impl GoogleCaptchaService {
    /// Create a new Google verification client
    ///
    /// The outbound timeout comes from the configuration; an expired
    /// call is reported as a provider fault rather than hanging the
    /// request.
    pub fn new(config: &CaptchaConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "Google reCAPTCHA client initialized (timeout: {}s)",
            config.request_timeout_secs
        );

        Ok(Self {
            client,
            verify_url: config.verify_url.clone(),
        })
    }

    async fn request_verdict(
        &self,
        secret: &str,
        token: &str,
    ) -> Result<SiteVerifyResponse, InfrastructureError> {
        let response = self
            .client
            .post(&self.verify_url)
            .form(&[("secret", secret), ("response", token)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(
                status = %status,
                "siteverify returned a non-success status"
            );
            return Err(InfrastructureError::Captcha(format!(
                "siteverify returned status {}",
                status
            )));
        }

        let body: SiteVerifyResponse = response.json().await?;
        debug!(
            success = body.success,
            score = ?body.score,
            hostname = ?body.hostname,
            challenge_ts = ?body.challenge_ts,
            "siteverify response received"
        );
        Ok(body)
    }
}

#[async_trait]
impl CaptchaProviderTrait for GoogleCaptchaService {
    async fn site_verify(&self, secret: &str, token: &str) -> Result<ProviderVerdict, String> {
        let body = self
            .request_verdict(secret, token)
            .await
            .map_err(|e| e.to_string())?;

        Ok(ProviderVerdict {
            success: body.success,
            score: body.score,
            action: body.action,
            error_codes: body.error_codes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_successful_response() {
        let json = r#"{
            "success": true,
            "score": 0.9,
            "action": "login",
            "challenge_ts": "2024-01-15T10:00:00Z",
            "hostname": "example.com"
        }"#;

        let parsed: SiteVerifyResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.score, Some(0.9));
        assert_eq!(parsed.action.as_deref(), Some("login"));
        assert!(parsed.error_codes.is_empty());
    }

    #[test]
    fn test_parse_failure_response_keeps_error_code_order() {
        let json = r#"{
            "success": false,
            "error-codes": ["timeout-or-duplicate", "invalid-input-secret"]
        }"#;

        let parsed: SiteVerifyResponse = serde_json::from_str(json).unwrap();
        assert!(!parsed.success);
        assert!(parsed.score.is_none());
        assert_eq!(
            parsed.error_codes,
            vec!["timeout-or-duplicate", "invalid-input-secret"]
        );
    }

    #[test]
    fn test_parse_minimal_response() {
        // Optional fields may all be absent
        let parsed: SiteVerifyResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(parsed.success);
        assert!(parsed.score.is_none());
        assert!(parsed.action.is_none());
        assert!(parsed.error_codes.is_empty());
    }

    #[test]
    fn test_client_builds_from_default_config() {
        let config = CaptchaConfig::default();
        let service = GoogleCaptchaService::new(&config);
        assert!(service.is_ok());
        assert_eq!(
            service.unwrap().verify_url,
            "https://www.google.com/recaptcha/api/siteverify"
        );
    }
}
