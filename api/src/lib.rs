//! # Verify-Captcha API
//!
//! HTTP surface for the verify-captcha backend: the verification
//! endpoint, liveness routes, CORS and security-header middleware, and
//! the request/response DTOs.

pub mod dto;
pub mod middleware;
pub mod routes;
