//! CORS middleware configuration for cross-origin requests.
//!
//! The verification endpoint is called from browser pages on arbitrary
//! sites, so CORS is part of the contract. The configuration is
//! environment-aware: permissive in development, restricted to a
//! configured origin list in production.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

use vc_shared::config::Environment;

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: Set to "production" for production settings
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors() -> Cors {
    let environment = Environment::from_env();
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    if environment.is_production() {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

/// Methods the verification endpoint advertises on preflight
fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::OPTIONS,
        Method::PATCH,
        Method::DELETE,
        Method::POST,
        Method::PUT,
    ]
}

/// Headers browser clients send alongside verification calls
fn allowed_headers() -> Vec<header::HeaderName> {
    vec![
        header::ACCEPT,
        header::CONTENT_TYPE,
        header::CONTENT_LENGTH,
        header::DATE,
        header::HeaderName::from_static("x-csrf-token"),
        header::HeaderName::from_static("x-requested-with"),
        header::HeaderName::from_static("accept-version"),
        header::HeaderName::from_static("content-md5"),
        header::HeaderName::from_static("x-api-version"),
    ]
}

/// Creates CORS configuration for development environment.
///
/// Permissive so the endpoint can be exercised from any local page or
/// development tool.
fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(allowed_headers())
        .max_age(max_age)
        .supports_credentials()
}

/// Creates CORS configuration for production environment.
///
/// Only origins listed in `ALLOWED_ORIGINS` may call the endpoint.
fn create_production_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(allowed_headers())
        .max_age(max_age);

    if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(|s| s.trim()) {
            if !origin.is_empty() {
                log::info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_development_cors() {
        env::set_var("ENVIRONMENT", "development");
        let _cors = create_cors();
        env::remove_var("ENVIRONMENT");
    }

    #[test]
    fn test_create_production_cors() {
        env::set_var("ENVIRONMENT", "production");
        env::set_var("ALLOWED_ORIGINS", "https://app.example.com,https://www.example.com");

        let _cors = create_cors();

        env::remove_var("ENVIRONMENT");
        env::remove_var("ALLOWED_ORIGINS");
    }
}
