//! # API Client
//!
//! Main HTTP client for placeholder backend communication.

use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::core::service::DirectoryService;
use shared::dto::employee::Employee;
use shared::dto::forms::EmployeeFormData;

/// HTTP client for the placeholder employee API.
///
/// Maintains a connection pool; clone-free sharing is left to the caller.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create an API client from configuration.
    ///
    /// The request timeout keeps the demo from hanging on a dead network.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Implement DirectoryService trait for ApiClient
#[async_trait::async_trait]
impl DirectoryService for ApiClient {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, String> {
        crate::services::api::employees::fetch_employees(self).await
    }

    async fn create_employee(&self, form: EmployeeFormData) -> Result<Employee, String> {
        crate::services::api::employees::create_employee(self, form).await
    }
}
