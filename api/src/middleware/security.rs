//! Security middleware adding hardening headers to responses.
//!
//! In production every response carries the standard browser hardening
//! headers; in development the middleware passes responses through
//! untouched so local tooling stays easy to inspect.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use vc_shared::config::Environment;

/// Security middleware factory
pub struct SecurityHeaders {
    /// Whether to add hardening headers to responses
    add_headers: bool,
}

impl SecurityHeaders {
    /// Creates a security middleware with environment-based configuration
    pub fn new() -> Self {
        let environment = Environment::from_env();
        let add_headers = environment.is_production();

        log::info!(
            "Security middleware configured: add_headers={}",
            add_headers
        );

        Self { add_headers }
    }

    /// Creates a middleware that always adds the hardening headers
    pub fn enforced() -> Self {
        Self { add_headers: true }
    }
}

impl Default for SecurityHeaders {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityHeadersService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersService {
            service: Rc::new(service),
            add_headers: self.add_headers,
        }))
    }
}

/// Security middleware service implementation
pub struct SecurityHeadersService<S> {
    service: Rc<S>,
    add_headers: bool,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let add_headers = self.add_headers;

        Box::pin(async move {
            let mut response = service.call(req).await?;

            if add_headers {
                add_security_response_headers(&mut response);
            }

            Ok(response)
        })
    }
}

/// Adds hardening headers to the response
fn add_security_response_headers<B>(response: &mut ServiceResponse<B>) {
    let headers = response.headers_mut();

    headers.insert(
        HeaderName::from_static("strict-transport-security"),
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        HeaderName::from_static("content-security-policy"),
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none';"),
    );
}
