//! # API Service Modules
//!
//! REST client for the placeholder backend
//! (`https://jsonplaceholder.typicode.com`). The backend persists nothing;
//! creates are echoed back with a fresh id.

pub mod client;
pub mod employees;

pub use client::ApiClient;
pub use employees::{ApiCompany, ApiUser};
