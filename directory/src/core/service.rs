//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::dto::employee::Employee;
use shared::dto::forms::EmployeeFormData;

/// Trait for directory API operations.
///
/// This trait allows swapping the real placeholder-API client for a mock in
/// tests; nothing in the store layer knows which implementation it is fed.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Fetch every employee in the directory.
    async fn fetch_employees(&self) -> std::result::Result<Vec<Employee>, String>;

    /// Create a new employee record from an already-validated form.
    async fn create_employee(
        &self,
        form: EmployeeFormData,
    ) -> std::result::Result<Employee, String>;
}
