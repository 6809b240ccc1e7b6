//! # Login Gate
//!
//! Demo login. The credential check is a hardcoded literal comparison behind
//! a simulated round-trip; this is not a credential system and must never
//! grow into one here.

use std::time::Duration;

use chrono::Utc;
use lib_validation::validate_login_form;
use shared::dto::auth::Session;
use shared::dto::forms::LoginFormData;

/// Username accepted by the gate.
pub const DEMO_USERNAME: &str = "admin";
/// Password accepted by the gate.
pub const DEMO_PASSWORD: &str = "password";

/// Simulated network round-trip for the credential check.
const LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// Log in with the demo credentials.
///
/// The form is validated first; on rejection the per-field messages are
/// joined into the error string.
#[tracing::instrument(skip(password), fields(username = %username))]
pub async fn login(username: &str, password: &str) -> Result<Session, String> {
    let form = LoginFormData {
        username: username.to_string(),
        password: password.to_string(),
    };

    let report = validate_login_form(&form);
    if !report.is_valid {
        let reasons: Vec<_> = report.errors.values().cloned().collect();
        tracing::warn!(reasons = ?reasons, "Login form rejected");
        return Err(reasons.join("; "));
    }

    tracing::info!("Attempting login");
    tokio::time::sleep(LOGIN_DELAY).await;

    if username == DEMO_USERNAME && password == DEMO_PASSWORD {
        tracing::info!("Login successful");
        Ok(Session {
            username: username.to_string(),
            logged_in_at: Utc::now(),
        })
    } else {
        tracing::warn!("Invalid credentials");
        Err("Invalid credentials. Try admin/password".to_string())
    }
}
