//! # Field Validators
//!
//! One validator per field kind, dispatched through [`Validator::check`].
//!
//! Every validator fails closed: a value of the wrong kind is simply invalid,
//! never a panic and never an error. The only operation that can fail
//! internally is URL parsing, and that failure is converted to `false`.

use chrono::{DateTime, NaiveDate, Utc};
use url::Url;

use crate::field::FieldValue;

/// Maximum length of an email address after trimming.
const EMAIL_MAX_LEN: usize = 254;

/// The validator kinds understood by the form runner.
///
/// Rules carry one of these variants as data; [`Validator::check`] is the
/// single dispatch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// `local@domain.tld`, lower-cased, no whitespace, no `..`, at most 254 chars.
    Email,
    /// Exactly 10 digits after stripping everything that is not a digit.
    Phone,
    /// 2 to 50 letters, spaces, hyphens or apostrophes.
    Name,
    /// Present, and non-blank when textual.
    Required,
    /// 6 to 128 chars with no leading or trailing whitespace.
    Password,
    /// 3 to 20 letters, digits or underscores.
    Username,
    /// Non-blank, at most 30 chars. Membership in the known department list
    /// is not checked.
    Department,
    /// Anything the URL parser accepts.
    Url,
    /// Whole number in [18, 100]; text input is coerced.
    Age,
    /// A parseable date that is not in the future.
    Date,
    /// Number in [1000, 1000000]; text input is coerced.
    Salary,
    /// 3 to 15 letters or digits.
    EmployeeId,
}

impl Validator {
    /// Check one field value against this validator.
    pub fn check(&self, value: &FieldValue) -> bool {
        match self {
            Validator::Email => value.as_text().is_some_and(email_ok),
            Validator::Phone => value.as_text().is_some_and(phone_ok),
            Validator::Name => value.as_text().is_some_and(name_ok),
            Validator::Required => required_ok(value),
            Validator::Password => value.as_text().is_some_and(password_ok),
            Validator::Username => value.as_text().is_some_and(username_ok),
            Validator::Department => value.as_text().is_some_and(department_ok),
            Validator::Url => value.as_text().is_some_and(url_ok),
            Validator::Age => age_ok(value),
            Validator::Date => date_ok(value),
            Validator::Salary => salary_ok(value),
            Validator::EmployeeId => value.as_text().is_some_and(employee_id_ok),
        }
    }
}

fn email_ok(raw: &str) -> bool {
    let email = raw.trim().to_lowercase();

    if email.is_empty() || email.chars().count() > EMAIL_MAX_LEN {
        return false;
    }
    if email.contains("..") || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // The last dot must sit strictly inside the domain: "user@host",
    // "user@.com" and "user@host." are all malformed.
    match domain.rfind('.') {
        Some(i) => i > 0 && i + 1 < domain.len(),
        None => false,
    }
}

fn phone_ok(raw: &str) -> bool {
    raw.chars().filter(char::is_ascii_digit).count() == 10
}

fn name_ok(raw: &str) -> bool {
    let name = raw.trim();
    if !(2..=50).contains(&name.chars().count()) {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '\'')
}

fn required_ok(value: &FieldValue) -> bool {
    match value {
        FieldValue::Missing => false,
        FieldValue::Text(s) => !s.trim().is_empty(),
        FieldValue::Number(_) | FieldValue::Date(_) => true,
    }
}

fn password_ok(raw: &str) -> bool {
    (6..=128).contains(&raw.chars().count()) && raw == raw.trim()
}

fn username_ok(raw: &str) -> bool {
    let username = raw.trim();
    (3..=20).contains(&username.chars().count())
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn department_ok(raw: &str) -> bool {
    let department = raw.trim();
    !department.is_empty() && department.chars().count() <= 30
}

fn url_ok(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}

fn age_ok(value: &FieldValue) -> bool {
    let age = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Text(s) => match s.trim().parse::<i64>() {
            Ok(n) => n as f64,
            Err(_) => return false,
        },
        _ => return false,
    };
    (18.0..=100.0).contains(&age)
}

fn date_ok(value: &FieldValue) -> bool {
    let date = match value {
        FieldValue::Date(d) => *d,
        FieldValue::Text(s) => match parse_date(s.trim()) {
            Some(d) => d,
            None => return false,
        },
        _ => return false,
    };
    date <= Utc::now()
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (taken as
/// midnight UTC).
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn salary_ok(value: &FieldValue) -> bool {
    let salary = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) => n,
            Err(_) => return false,
        },
        _ => return false,
    };
    (1000.0..=1_000_000.0).contains(&salary)
}

fn employee_id_ok(raw: &str) -> bool {
    let id = raw.trim();
    (3..=15).contains(&id.chars().count()) && id.chars().all(|c| c.is_ascii_alphanumeric())
}
