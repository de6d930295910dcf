//! Captcha verification service module
//!
//! This module implements the server side of reCAPTCHA v3 verification:
//! - Fail-fast validation of the incoming token
//! - Configuration check for the shared secret before any network call
//! - A single forwarding call to the provider behind an injected trait
//! - Interpretation of the provider verdict against the score threshold

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::CaptchaServiceConfig;
pub use service::VerificationService;
pub use traits::CaptchaProviderTrait;
pub use types::{ProviderVerdict, VerificationDecision};
