//! # Employee Endpoints
//!
//! Fetches placeholder users and maps them onto directory entries.

use serde::{Deserialize, Serialize};

use shared::dto::employee::{Employee, EmployeeStatus, DEPARTMENTS};
use shared::dto::forms::EmployeeFormData;

use super::client::ApiClient;

/// Wire shape of a placeholder-API user record (subset of fields used).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiUser {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<ApiCompany>,
}

/// Company block of a placeholder user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiCompany {
    pub name: String,
    #[serde(rename = "catchPhrase", default)]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

/// Response body of `POST /users`: the assigned id of the echoed record.
#[derive(Debug, Deserialize)]
struct CreatedUser {
    id: u32,
}

/// Fetch all placeholder users and map them to directory entries.
#[tracing::instrument(skip(client))]
pub async fn fetch_employees(client: &ApiClient) -> Result<Vec<Employee>, String> {
    tracing::info!("Fetching employee directory");
    let start = std::time::Instant::now();

    let response = client
        .client
        .get(format!("{}/users", client.base_url()))
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Directory fetch network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Directory fetch failed");
        return Err(format!("Failed to fetch users: HTTP {}", status.as_u16()));
    }

    let users = response.json::<Vec<ApiUser>>().await.map_err(|e| {
        tracing::error!(error = %e, "Directory response parse error");
        format!("Failed to parse response: {}", e)
    })?;

    tracing::info!(
        count = users.len(),
        duration_ms = start.elapsed().as_millis(),
        "Directory fetched"
    );
    Ok(users.into_iter().map(employee_from_user).collect())
}

/// Create a placeholder user from an already-validated employee form.
///
/// The backend echoes the record with a fresh id and forgets it; the caller
/// gets a directory entry assembled from the form plus that id.
pub async fn create_employee(
    client: &ApiClient,
    form: EmployeeFormData,
) -> Result<Employee, String> {
    let response = client
        .client
        .post(format!("{}/users", client.base_url()))
        .json(&form)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("Failed to create user: HTTP {}", status.as_u16()));
    }

    let created = response
        .json::<CreatedUser>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(Employee {
        id: created.id,
        name: form.name,
        email: form.email,
        phone: form.phone,
        department: form.department,
        status: EmployeeStatus::Active,
    })
}

/// Map a placeholder user onto a directory entry.
fn employee_from_user(user: ApiUser) -> Employee {
    Employee {
        id: user.id,
        name: user.name,
        email: user.email,
        phone: user.phone,
        department: department_for(user.id).to_string(),
        status: EmployeeStatus::Active,
    }
}

/// Assign a department by id rotation over the known list.
///
/// The placeholder backend has no department field, so entries get one
/// deterministically from the id.
fn department_for(id: u32) -> &'static str {
    DEPARTMENTS[id as usize % DEPARTMENTS.len()]
}
