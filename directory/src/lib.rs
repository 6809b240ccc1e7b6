//! # Employee Directory - Library Root
//!
//! Headless employee-directory demo application. This library crate contains
//! all modules used by the binary crate (`main.rs`):
//!
//! - **[`config`]**: Environment-driven runtime configuration
//! - **[`core`]**: Error types and the service trait for dependency injection
//! - **[`services`]**: The placeholder REST client and the login gate
//! - **[`store`]**: Pure state containers backing the screens
//!
//! ## Flow
//!
//! ```text
//! login gate ──► auth slice
//!                   │
//! placeholder API ──► employee slice ──► listing output
//! ```
//!
//! Form input is validated by `lib-validation` before it reaches a service or
//! a state container; the containers never re-validate.

pub mod config;
pub mod core;
pub mod services;
pub mod store;
