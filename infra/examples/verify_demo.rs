//! Example: verifying a token against the live siteverify endpoint
//!
//! Reads the secret and other settings from the environment (or a .env
//! file), then verifies the token given as the first argument.
//!
//! Run with: cargo run --example verify_demo -p vc_infra -- <token>

use std::sync::Arc;

use vc_core::services::captcha::{CaptchaServiceConfig, VerificationService};
use vc_infra::captcha::GoogleCaptchaService;
use vc_shared::config::CaptchaConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = CaptchaConfig::from_env();
    let provider = Arc::new(GoogleCaptchaService::new(&config)?);
    let service = VerificationService::new(provider, CaptchaServiceConfig::from(&config));

    let token = std::env::args().nth(1).unwrap_or_default();

    match service.verify_token(&token).await {
        Ok(decision) => {
            println!("accepted: {}", decision.accepted);
            if let Some(score) = decision.score {
                println!("score:    {}", score);
            }
            if let Some(action) = &decision.action {
                println!("action:   {}", action);
            }
            if !decision.reasons.is_empty() {
                println!("reasons:  {:?}", decision.reasons);
            }
            println!("message:  {}", decision.message);
        }
        Err(e) => eprintln!("verification failed: {}", e),
    }

    Ok(())
}
