//! Tests for the captcha verification service

#[cfg(test)]
mod mocks;
