//! # Form Contracts
//!
//! Fixed rule tables for the employee and login forms. Callers hand over the
//! form record and get a [`ValidationReport`] back; the individual rules are
//! an implementation detail of this module.

use shared::dto::forms::{EmployeeFormData, LoginFormData};

use crate::field::FieldValue;
use crate::form::{validate_form, FormValues, ValidationReport, ValidationRule};
use crate::validators::Validator;

/// Rules for the employee form. Immutable, defined once, no write path.
static EMPLOYEE_RULES: [ValidationRule; 4] = [
    ValidationRule {
        field: "name",
        validator: Validator::Name,
        message: "Name must be at least 2 characters and contain only letters",
    },
    ValidationRule {
        field: "email",
        validator: Validator::Email,
        message: "Please enter a valid email address",
    },
    ValidationRule {
        field: "phone",
        validator: Validator::Phone,
        message: "Please enter a valid 10-digit phone number",
    },
    ValidationRule {
        field: "department",
        validator: Validator::Required,
        message: "Department is required",
    },
];

/// Rules for the login form.
static LOGIN_RULES: [ValidationRule; 2] = [
    ValidationRule {
        field: "username",
        validator: Validator::Username,
        message: "Username must be at least 3 characters",
    },
    ValidationRule {
        field: "password",
        validator: Validator::Password,
        message: "Password must be at least 6 characters",
    },
];

/// Validate a whole employee form.
pub fn validate_employee_form(data: &EmployeeFormData) -> ValidationReport {
    let mut values = FormValues::new();
    values.insert("name".to_string(), FieldValue::from(data.name.as_str()));
    values.insert("email".to_string(), FieldValue::from(data.email.as_str()));
    values.insert("phone".to_string(), FieldValue::from(data.phone.as_str()));
    values.insert(
        "department".to_string(),
        FieldValue::from(data.department.as_str()),
    );

    validate_form(&values, &EMPLOYEE_RULES)
}

/// Validate a whole login form.
pub fn validate_login_form(data: &LoginFormData) -> ValidationReport {
    let mut values = FormValues::new();
    values.insert(
        "username".to_string(),
        FieldValue::from(data.username.as_str()),
    );
    values.insert(
        "password".to_string(),
        FieldValue::from(data.password.as_str()),
    );

    validate_form(&values, &LOGIN_RULES)
}
