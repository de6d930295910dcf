use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use vc_core::services::captcha::VerificationDecision;

/// Request body for POST /api/verify
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyRequest {
    /// Token obtained from the reCAPTCHA widget on the client.
    /// Defaults to empty when the field is absent so the handler can
    /// answer with the contract's own error body instead of a
    /// deserialization failure.
    #[serde(rename = "recaptchaToken", default)]
    #[validate(length(min = 1))]
    pub recaptcha_token: String,

    /// Optional application payload, passed through untouched for the
    /// surrounding application
    #[serde(rename = "formData", skip_serializing_if = "Option::is_none")]
    pub form_data: Option<Value>,
}

/// Response body for POST /api/verify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Whether the verification passed
    pub success: bool,

    /// Human-readable summary
    pub message: String,

    /// Trust score, when the provider produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Action the token was issued for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Provider error codes, verbatim and in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl VerifyResponse {
    /// Response for an accepted verification
    pub fn accepted(decision: &VerificationDecision) -> Self {
        Self {
            success: true,
            message: decision.message.clone(),
            score: decision.score,
            action: decision.action.clone(),
            errors: None,
        }
    }

    /// Response for a rejected verification decision
    pub fn rejected(decision: &VerificationDecision) -> Self {
        Self {
            success: false,
            message: decision.message.clone(),
            score: decision.score,
            action: None,
            errors: if decision.reasons.is_empty() {
                None
            } else {
                Some(decision.reasons.clone())
            },
        }
    }

    /// Response for a request that failed outside the decision flow
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            score: None,
            action: None,
            errors: None,
        }
    }
}

/// Response body for GET /api/verify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
    pub cors: String,
}

impl Default for StatusResponse {
    fn default() -> Self {
        Self {
            success: true,
            message: "reCAPTCHA Verify API is running".to_string(),
            cors: "Enabled".to_string(),
        }
    }
}
