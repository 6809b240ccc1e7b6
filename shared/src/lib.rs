//! # Shared Data Records Library
//!
//! This library defines the plain data records shared by the validation
//! library and the directory application.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data records passed between modules
//!   - **[`dto::employee`]**: Directory entries, statuses and the known department list
//!   - **[`dto::forms`]**: Transient form records consumed by the form validators
//!   - **[`dto::auth`]**: Demo session record produced by the login gate
//!   - **[`dto::user`]**: Profile record managed by the user state container
//!
//! ## Wire Format
//!
//! All records serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::forms::EmployeeFormData;
//!
//! let form = EmployeeFormData {
//!     name: "Alice Johnson".to_string(),
//!     email: "alice@example.com".to_string(),
//!     phone: "5551234567".to_string(),
//!     department: "Engineering".to_string(),
//! };
//! assert_eq!(form.department, "Engineering");
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a data-record library
// where all exports are meant to be public API
pub use dto::*;
