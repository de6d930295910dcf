//! Types for captcha verification results

/// Parsed provider response for a single token
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderVerdict {
    /// Whether the provider accepted the token at all
    pub success: bool,
    /// Trust score in [0, 1]; present on successful v3 verifications
    pub score: Option<f64>,
    /// Action name the token was issued for
    pub action: Option<String>,
    /// Provider error codes, in the order the provider returned them
    pub error_codes: Vec<String>,
}

impl ProviderVerdict {
    /// Verdict for an accepted token with a score
    pub fn passed(score: f64, action: Option<&str>) -> Self {
        Self {
            success: true,
            score: Some(score),
            action: action.map(str::to_string),
            error_codes: Vec::new(),
        }
    }

    /// Verdict for a token the provider rejected
    pub fn failed(error_codes: Vec<String>) -> Self {
        Self {
            success: false,
            score: None,
            action: None,
            error_codes,
        }
    }
}

/// Result of verifying a token against the score threshold
///
/// `accepted` is true only when the provider reported success and the
/// score met the threshold. Nothing is mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationDecision {
    /// Whether the verification passed
    pub accepted: bool,
    /// Trust score, when the provider produced one
    pub score: Option<f64>,
    /// Action name, when the provider reported one
    pub action: Option<String>,
    /// Provider error codes carried verbatim on rejection
    pub reasons: Vec<String>,
    /// Human-readable summary of the decision
    pub message: String,
}
