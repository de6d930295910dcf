//! Trait for captcha provider integration

use async_trait::async_trait;

use super::types::ProviderVerdict;

/// Trait for the remote verification provider
///
/// The error side is a plain string so infrastructure error types never
/// leak into the domain layer; the service maps any failure here to a
/// provider fault.
#[async_trait]
pub trait CaptchaProviderTrait: Send + Sync {
    /// Submit a token to the provider's verification endpoint
    async fn site_verify(&self, secret: &str, token: &str) -> Result<ProviderVerdict, String>;
}
