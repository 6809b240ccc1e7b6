//! # Form Runner
//!
//! Evaluates an ordered rule list against a record of field values and
//! collects one message per failing field.

use std::collections::BTreeMap;

use crate::field::FieldValue;
use crate::validators::Validator;

/// Field values keyed by field name.
pub type FormValues = BTreeMap<String, FieldValue>;

/// One constraint on one field: the field name, the validator to run and the
/// message to record when it fails.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    pub field: &'static str,
    pub validator: Validator,
    pub message: &'static str,
}

/// Outcome of validating a whole form.
///
/// `errors` holds only the fields that failed; an absent key means the field
/// passed. The map is rebuilt from scratch on every run, so a field that has
/// become valid never drags a stale message along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl ValidationReport {
    /// Message recorded for a field, if it failed.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Run every rule against `values` and collect the failures.
///
/// Rules are evaluated independently with no short-circuit: a failure on an
/// early field never hides a failure on a later one, and permuting the rule
/// list cannot change the outcome. A field with no entry in `values` is
/// checked as [`FieldValue::Missing`].
pub fn validate_form(values: &FormValues, rules: &[ValidationRule]) -> ValidationReport {
    let mut errors = BTreeMap::new();

    for rule in rules {
        let value = values.get(rule.field).unwrap_or(&FieldValue::Missing);
        if !rule.validator.check(value) {
            errors.insert(rule.field.to_string(), rule.message.to_string());
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static RULES: [ValidationRule; 3] = [
        ValidationRule {
            field: "email",
            validator: Validator::Email,
            message: "bad email",
        },
        ValidationRule {
            field: "phone",
            validator: Validator::Phone,
            message: "bad phone",
        },
        ValidationRule {
            field: "department",
            validator: Validator::Required,
            message: "department required",
        },
    ];

    fn values(email: &str, phone: &str) -> FormValues {
        let mut values = FormValues::new();
        values.insert("email".to_string(), FieldValue::from(email));
        values.insert("phone".to_string(), FieldValue::from(phone));
        values
    }

    #[test]
    fn test_all_rules_run_without_short_circuit() {
        // Three failures at once: both bad values and the missing field.
        let report = validate_form(&values("nope", "123"), &RULES);

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 3);
        assert_eq!(report.error("email"), Some("bad email"));
        assert_eq!(report.error("phone"), Some("bad phone"));
        assert_eq!(report.error("department"), Some("department required"));
    }

    #[test]
    fn test_passing_fields_leave_no_key() {
        let mut input = values("a@b.com", "123");
        input.insert("department".to_string(), FieldValue::from("Sales"));

        let report = validate_form(&input, &RULES);

        assert!(!report.is_valid);
        assert_eq!(report.error("email"), None);
        assert_eq!(report.error("department"), None);
        assert_eq!(report.errors.keys().collect::<Vec<_>>(), vec!["phone"]);
    }

    #[test]
    fn test_empty_rule_list_is_valid() {
        let report = validate_form(&values("nope", "123"), &[]);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_rule_order_does_not_change_the_report() {
        let input = values("nope", "5551234567");

        let forward = validate_form(&input, &RULES);

        let mut reversed = RULES;
        reversed.reverse();
        let backward = validate_form(&input, &reversed);

        assert_eq!(forward, backward);

        let rotated = [RULES[2], RULES[0], RULES[1]];
        assert_eq!(validate_form(&input, &rotated), forward);
    }

    #[test]
    fn test_report_is_rebuilt_from_scratch() {
        let first = validate_form(&values("nope", "5551234567"), &RULES);
        assert_eq!(first.error("email"), Some("bad email"));

        // Fixing the field between runs must not leave a stale message.
        let mut input = values("a@b.com", "5551234567");
        input.insert("department".to_string(), FieldValue::from("Sales"));
        let second = validate_form(&input, &RULES);

        assert!(second.is_valid);
        assert!(second.errors.is_empty());
    }
}
