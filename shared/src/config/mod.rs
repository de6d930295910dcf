//! Configuration modules loaded from the process environment.

pub mod captcha;
pub mod environment;
pub mod server;

pub use captcha::CaptchaConfig;
pub use environment::Environment;
pub use server::ServerConfig;
