use actix_web::{web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::verify::{StatusResponse, VerifyRequest, VerifyResponse};

use vc_core::errors::DomainError;
use vc_core::services::captcha::{CaptchaProviderTrait, VerificationService};

/// Application state that holds the shared verification service
pub struct AppState<P: CaptchaProviderTrait> {
    pub verification: Arc<VerificationService<P>>,
}

/// Handler for POST /api/verify
///
/// Verifies a reCAPTCHA v3 token and answers with the decision.
///
/// # Request Body
///
/// ```json
/// {
///     "recaptchaToken": "<token from the widget>",
///     "formData": { "any": "application payload" }
/// }
/// ```
///
/// # Responses
///
/// * 200 - token verified, score at or above the threshold
/// * 400 - missing token, provider rejection, or below-threshold score
/// * 500 - server misconfiguration or provider fault
///
/// Internal failure detail is logged server-side; the client only sees
/// the fixed messages of the wire contract.
pub async fn verify<P>(
    state: web::Data<AppState<P>>,
    request: web::Json<VerifyRequest>,
) -> HttpResponse
where
    P: CaptchaProviderTrait + 'static,
{
    // Request ID for log correlation
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing verify request (token length: {})",
        request_id,
        request.recaptcha_token.len()
    );

    // Fail fast on an absent or empty token; no provider call is made
    if request.0.validate().is_err() {
        log::warn!("[{}] Request rejected: missing recaptchaToken", request_id);
        return HttpResponse::BadRequest().json(VerifyResponse::failure("Missing recaptchaToken"));
    }

    match state.verification.verify_token(&request.recaptcha_token).await {
        Ok(decision) if decision.accepted => {
            log::info!(
                "[{}] Verification passed, score: {:?}",
                request_id,
                decision.score
            );

            // The payload is only surfaced for the surrounding
            // application; this service performs no persistence.
            if let Some(form_data) = &request.form_data {
                log::info!("[{}] Form data received: {}", request_id, form_data);
            }

            HttpResponse::Ok().json(VerifyResponse::accepted(&decision))
        }
        Ok(decision) => {
            log::warn!(
                "[{}] Verification rejected: {} (score: {:?}, reasons: {:?})",
                request_id,
                decision.message,
                decision.score,
                decision.reasons
            );
            HttpResponse::BadRequest().json(VerifyResponse::rejected(&decision))
        }
        Err(DomainError::Validation { message }) => {
            log::warn!("[{}] Invalid request: {}", request_id, message);
            HttpResponse::BadRequest().json(VerifyResponse::failure("Missing recaptchaToken"))
        }
        Err(DomainError::Configuration { message }) => {
            log::error!("[{}] Configuration fault: {}", request_id, message);
            HttpResponse::InternalServerError()
                .json(VerifyResponse::failure("Server configuration error"))
        }
        Err(DomainError::Provider { message }) => {
            log::error!("[{}] Provider fault: {}", request_id, message);
            HttpResponse::InternalServerError().json(VerifyResponse::failure("Server error"))
        }
    }
}

/// Handler for GET /api/verify
///
/// Static probe confirming the endpoint is up and CORS-enabled.
pub async fn verify_status() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse::default())
}

/// Handler for bare OPTIONS probes outside a CORS preflight
pub async fn preflight_ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Fallback for unsupported methods on the verify resource
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(VerifyResponse::failure("Method not allowed"))
}
