use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use log::info;
use std::sync::Arc;

use vc_api::middleware;
use vc_api::routes;
use vc_api::routes::verify::AppState;

use vc_core::services::captcha::{
    CaptchaProviderTrait, CaptchaServiceConfig, VerificationService,
};
use vc_infra::captcha::{GoogleCaptchaService, MockCaptchaService};
use vc_shared::config::{CaptchaConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting reCAPTCHA Verify API server");

    // Load configuration
    let server_config = ServerConfig::from_env();
    let captcha_config = CaptchaConfig::from_env();

    if captcha_config.secret_key.is_none() {
        // Startup proceeds; each verify request answers with a
        // configuration fault until the secret is provided.
        log::warn!("RECAPTCHA_SECRET_KEY is not set");
    }

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    match captcha_config.provider.as_str() {
        "google" => {
            let provider = GoogleCaptchaService::new(&captcha_config)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
            run_server(Arc::new(provider), &captcha_config, &bind_address).await
        }
        "mock" => {
            log::warn!("Using mock captcha provider; tokens are not actually verified");
            run_server(Arc::new(MockCaptchaService::new()), &captcha_config, &bind_address).await
        }
        other => {
            log::warn!(
                "Unknown captcha provider '{}', using mock implementation",
                other
            );
            run_server(Arc::new(MockCaptchaService::new()), &captcha_config, &bind_address).await
        }
    }
}

async fn run_server<P>(
    provider: Arc<P>,
    captcha_config: &CaptchaConfig,
    bind_address: &str,
) -> std::io::Result<()>
where
    P: CaptchaProviderTrait + 'static,
{
    let verification = Arc::new(VerificationService::new(
        provider,
        CaptchaServiceConfig::from(captcha_config),
    ));

    HttpServer::new(move || {
        let cors = middleware::cors::create_cors();
        let security = middleware::security::SecurityHeaders::new();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .wrap(security)
            .app_data(web::Data::new(AppState {
                verification: verification.clone(),
            }))
            // Health check endpoint
            .route("/health", web::get().to(routes::health::health_check))
            // Verification endpoint
            .service(
                web::resource("/api/verify")
                    .route(web::post().to(routes::verify::verify::<P>))
                    .route(web::get().to(routes::verify::verify_status))
                    .route(
                        web::method(actix_web::http::Method::OPTIONS)
                            .to(routes::verify::preflight_ok),
                    )
                    .route(web::route().to(routes::verify::method_not_allowed)),
            )
            // Default 404 handler
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": "not_found",
                    "message": "The requested resource was not found"
                }))
            }))
    })
    .bind(bind_address)?
    .run()
    .await
}
