//! Mock captcha provider implementation
//!
//! A mock implementation of the captcha provider for development and
//! testing. It returns a canned verdict instead of calling out to the
//! verification API, and counts invocations so tests can assert how
//! many outbound calls a path would have made.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use vc_core::services::captcha::{CaptchaProviderTrait, ProviderVerdict};

/// Mock captcha provider for development and testing
#[derive(Clone)]
pub struct MockCaptchaService {
    /// Verdict template returned for every token
    verdict: ProviderVerdict,
    /// Whether to simulate a transport failure
    simulate_failure: bool,
    /// Counter for tracking provider invocations
    call_count: Arc<AtomicU64>,
}

impl MockCaptchaService {
    /// Create a mock that accepts every token with a high score
    pub fn new() -> Self {
        Self::with_verdict(ProviderVerdict::passed(0.9, None))
    }

    /// Create a mock returning the given verdict for every token
    pub fn with_verdict(verdict: ProviderVerdict) -> Self {
        Self {
            verdict,
            simulate_failure: false,
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create a mock that simulates a transport failure
    pub fn failing() -> Self {
        Self {
            verdict: ProviderVerdict::failed(Vec::new()),
            simulate_failure: true,
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of verification calls made against this mock
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockCaptchaService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptchaProviderTrait for MockCaptchaService {
    async fn site_verify(&self, _secret: &str, token: &str) -> Result<ProviderVerdict, String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.simulate_failure {
            warn!(
                target: "captcha_provider",
                provider = "mock",
                "Mock captcha provider simulating failure"
            );
            return Err("Simulated captcha provider failure".to_string());
        }

        info!(
            target: "captcha_provider",
            provider = "mock",
            token_length = token.len(),
            success = self.verdict.success,
            score = ?self.verdict.score,
            "Token verified (mock)"
        );

        Ok(self.verdict.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_verdict_passes() {
        let service = MockCaptchaService::new();
        let verdict = service.site_verify("secret", "token").await.unwrap();

        assert!(verdict.success);
        assert_eq!(verdict.score, Some(0.9));
        assert_eq!(service.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_canned_verdict() {
        let service = MockCaptchaService::with_verdict(ProviderVerdict::failed(vec![
            "invalid-input-response".to_string(),
        ]));
        let verdict = service.site_verify("secret", "token").await.unwrap();

        assert!(!verdict.success);
        assert_eq!(verdict.error_codes, vec!["invalid-input-response"]);
    }

    #[tokio::test]
    async fn test_mock_simulated_failure() {
        let service = MockCaptchaService::failing();
        let result = service.site_verify("secret", "token").await;

        assert!(result.is_err());
        assert_eq!(service.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_counts_calls() {
        let service = MockCaptchaService::new();
        for i in 1..=3 {
            let _ = service.site_verify("secret", "token").await;
            assert_eq!(service.call_count(), i);
        }
    }
}
