//! Business services containing domain logic and use cases.

pub mod captcha;

// Re-export commonly used types
pub use captcha::{
    CaptchaProviderTrait, CaptchaServiceConfig, ProviderVerdict, VerificationDecision,
    VerificationService,
};
