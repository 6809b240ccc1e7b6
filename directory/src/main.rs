//! Headless demo binary: log in through the gate, fetch the directory from
//! the placeholder backend, add one validated entry and print the listing.

use directory::config::Config;
use directory::core::error::{AppError, Result};
use directory::core::service::DirectoryService;
use directory::services::api::ApiClient;
use directory::services::auth;
use directory::store::Store;
use lib_validation::{capitalize_words, format_phone, sanitize_input, validate_employee_form};
use shared::dto::forms::EmployeeFormData;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Directory demo failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env().map_err(AppError::Config)?;
    config.validate().map_err(AppError::Config)?;

    let mut store = Store::default();

    // Login gate
    store.auth.login_start();
    match auth::login(auth::DEMO_USERNAME, auth::DEMO_PASSWORD).await {
        Ok(session) => store.auth.login_success(session.username),
        Err(e) => {
            store.auth.login_failure();
            return Err(AppError::Auth(e));
        }
    }

    // Directory listing
    let client = ApiClient::new(&config);

    store.employees.fetch_start();
    match client.fetch_employees().await {
        Ok(employees) => store.employees.fetch_success(employees),
        Err(e) => {
            store.employees.fetch_failure(e.clone());
            return Err(e.into());
        }
    }

    // New hire, the way a form submit would arrive: sanitized, validated,
    // then handed to the service.
    let form = EmployeeFormData {
        name: sanitize_input("  Jordan   Reyes "),
        email: sanitize_input("jordan.reyes@example.com"),
        phone: sanitize_input("555-123-9876"),
        department: sanitize_input("Engineering"),
    };

    let report = validate_employee_form(&form);
    if !report.is_valid {
        let reasons: Vec<_> = report.errors.values().cloned().collect();
        return Err(AppError::Validation(reasons.join("; ")));
    }

    let hired = client.create_employee(form).await?;
    store.employees.add_employee(hired.clone());
    tracing::info!(id = hired.id, "New hire added");

    // Listing output
    println!(
        "Employee directory for {} ({} entries)",
        store.auth.username,
        store.employees.employees.len()
    );
    for employee in &store.employees.employees {
        println!(
            "  #{:<3} {:<24} {:<12} {:<30} {}",
            employee.id,
            capitalize_words(&employee.name),
            employee.department,
            employee.email,
            format_phone(&employee.phone),
        );
    }

    Ok(())
}
