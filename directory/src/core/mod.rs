//! # Core Abstractions
//!
//! Error types and the service trait used for dependency injection.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`DirectoryService`)

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{AppError, Result};
pub use service::DirectoryService;
