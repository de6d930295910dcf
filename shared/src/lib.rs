//! # Shared
//!
//! Configuration types shared across the verify-captcha workspace.
//! This crate holds environment detection and the typed configuration
//! structs that the infrastructure and API layers load at process start.

pub mod config;
