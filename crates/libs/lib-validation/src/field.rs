//! # Field Values
//!
//! Tagged representation of one raw form input. Screens keep their transient
//! form state as plain strings or numbers; wrapping a value in [`FieldValue`]
//! lets a validator know the kind of input it was handed without guessing at
//! runtime.

use chrono::{DateTime, Utc};

/// A single raw form input, passed by value into validators.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free-form text input.
    Text(String),
    /// Numeric input (ages, salaries).
    Number(f64),
    /// Date input.
    Date(DateTime<Utc>),
    /// No value was entered for the field.
    Missing,
}

impl FieldValue {
    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Date(value)
    }
}

/// `None` becomes [`FieldValue::Missing`].
impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(FieldValue::from("hi"), FieldValue::Text("hi".to_string()));
        assert_eq!(FieldValue::from(21), FieldValue::Number(21.0));
        assert_eq!(FieldValue::from(21.5), FieldValue::Number(21.5));
        assert_eq!(FieldValue::from(None::<&str>), FieldValue::Missing);
        assert_eq!(
            FieldValue::from(Some("hi")),
            FieldValue::Text("hi".to_string())
        );
    }

    #[test]
    fn test_as_text() {
        assert_eq!(FieldValue::from("hi").as_text(), Some("hi"));
        assert_eq!(FieldValue::Missing.as_text(), None);
        assert_eq!(FieldValue::Number(3.0).as_text(), None);
    }
}
