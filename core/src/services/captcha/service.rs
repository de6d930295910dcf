//! Main verification service implementation

use std::sync::Arc;
use tracing;

use crate::errors::{DomainError, DomainResult};

use super::config::CaptchaServiceConfig;
use super::traits::CaptchaProviderTrait;
use super::types::VerificationDecision;

/// Verification service for reCAPTCHA v3 tokens
///
/// Stateless apart from the injected read-only configuration and the
/// provider handle; concurrent invocations do not interact.
pub struct VerificationService<P: CaptchaProviderTrait> {
    /// Provider used to verify tokens
    provider: Arc<P>,
    /// Service configuration
    config: CaptchaServiceConfig,
}

impl<P: CaptchaProviderTrait> VerificationService<P> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `provider` - Captcha provider implementation
    /// * `config` - Injected secret and score threshold
    pub fn new(provider: Arc<P>, config: CaptchaServiceConfig) -> Self {
        Self { provider, config }
    }

    /// Verify a token and decide whether to accept it
    ///
    /// This method:
    /// 1. Rejects an empty token without contacting the provider
    /// 2. Rejects when the secret is unset, also without a network call
    /// 3. Forwards the token to the provider exactly once, no retry
    /// 4. Interprets the verdict against the score threshold
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationDecision)` - The policy decision; a rejected
    ///   token or a below-threshold score is still `Ok`
    /// * `Err(DomainError)` - Input, configuration, or provider fault
    pub async fn verify_token(&self, token: &str) -> DomainResult<VerificationDecision> {
        if token.is_empty() {
            tracing::warn!(
                event = "missing_token",
                "Verification requested without a token"
            );
            return Err(DomainError::Validation {
                message: "missing token".to_string(),
            });
        }

        let secret = self.config.secret_key.as_deref().ok_or_else(|| {
            tracing::error!(
                event = "secret_not_configured",
                "Verification secret is not configured"
            );
            DomainError::Configuration {
                message: "verification secret is not configured".to_string(),
            }
        })?;

        let verdict = self
            .provider
            .site_verify(secret, token)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    event = "provider_call_failed",
                    "Captcha provider call failed"
                );
                DomainError::Provider { message: e }
            })?;

        if !verdict.success {
            tracing::warn!(
                error_codes = ?verdict.error_codes,
                event = "token_rejected",
                "Provider rejected the token"
            );
            return Ok(VerificationDecision {
                accepted: false,
                score: verdict.score,
                action: verdict.action,
                reasons: verdict.error_codes,
                message: "reCAPTCHA verification failed".to_string(),
            });
        }

        // A successful v3 verdict always carries a score; its absence
        // means the reply was not a v3 verdict at all.
        let score = verdict.score.ok_or_else(|| {
            tracing::error!(
                event = "malformed_verdict",
                "Provider verdict is missing a score"
            );
            DomainError::Provider {
                message: "provider verdict missing score".to_string(),
            }
        })?;

        if score < self.config.score_threshold {
            tracing::info!(
                score,
                threshold = self.config.score_threshold,
                event = "score_below_threshold",
                "Token scored below the acceptance threshold"
            );
            return Ok(VerificationDecision {
                accepted: false,
                score: Some(score),
                action: verdict.action,
                reasons: Vec::new(),
                message: "Score too low, suspected bot".to_string(),
            });
        }

        tracing::info!(
            score,
            action = ?verdict.action,
            event = "token_verified",
            "Token verified"
        );
        Ok(VerificationDecision {
            accepted: true,
            score: Some(score),
            action: verdict.action,
            reasons: Vec::new(),
            message: "Verification successful".to_string(),
        })
    }

    /// The score threshold this service accepts at
    pub fn score_threshold(&self) -> f64 {
        self.config.score_threshold
    }
}
