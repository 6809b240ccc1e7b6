//! # Form Validation Library
//!
//! Field validators, the generic form runner and the input transforms used by
//! every screen that accepts user input.
//!
//! Everything in this crate is a pure function over plain data: same input,
//! same answer, no shared state. Invalid input is reported as a `bool` or as
//! an error map, never as an `Err` and never as a panic.

pub mod field;
pub mod form;
pub mod forms;
pub mod sanitize;
pub mod validators;

// Re-export commonly used items
pub use field::FieldValue;
pub use form::{validate_form, FormValues, ValidationReport, ValidationRule};
pub use forms::{validate_employee_form, validate_login_form};
pub use sanitize::{capitalize_words, format_phone, sanitize_input};
pub use validators::Validator;
