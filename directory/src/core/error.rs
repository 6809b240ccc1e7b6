//! # Common Error Types
//!
//! Consolidated error handling for the directory application.
//!
//! ## Error Categories
//!
//! - **Api**: Placeholder backend communication (network, HTTP status, JSON parsing)
//! - **Auth**: Login-gate failures (bad credentials, rejected login form)
//! - **Config**: Environment configuration problems at startup
//! - **Validation**: Form input rejected by the validators
//!
//! Service-layer functions report failures as plain `String`s in the manner
//! of the client modules; `From<String>` folds those into [`AppError::Api`]
//! so the binary can use `?` on them.

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the demo.
///
/// Each variant carries a descriptive `String` for context. The `#[error]`
/// attribute from `thiserror` provides the `Display` implementation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Placeholder backend communication error.
    #[error("API error: {0}")]
    Api(String),

    /// Login-gate failure.
    #[error("Auth error: {0}")]
    Auth(String),

    /// Configuration error during startup.
    #[error("Config error: {0}")]
    Config(String),

    /// Form input rejected by the validators.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}
