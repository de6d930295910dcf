//! Mock provider for testing the verification service

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::services::captcha::traits::CaptchaProviderTrait;
use crate::services::captcha::types::ProviderVerdict;

/// Mock captcha provider returning a canned verdict
pub struct MockCaptchaProvider {
    verdict: Result<ProviderVerdict, String>,
    calls: AtomicUsize,
    pub requests: Mutex<Vec<(String, String)>>, // (secret, token)
}

impl MockCaptchaProvider {
    pub fn returning(verdict: ProviderVerdict) -> Self {
        Self {
            verdict: Ok(verdict),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            verdict: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of site_verify calls made against this mock
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaptchaProviderTrait for MockCaptchaProvider {
    async fn site_verify(&self, secret: &str, token: &str) -> Result<ProviderVerdict, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((secret.to_string(), token.to_string()));
        self.verdict.clone()
    }
}
