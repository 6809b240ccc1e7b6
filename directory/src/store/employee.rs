//! # Employee Slice
//!
//! Directory listing state and its transitions.

use shared::dto::employee::Employee;

/// Employee directory state slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeState {
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EmployeeState {
    /// A directory fetch has started; any previous error is cleared.
    pub fn fetch_start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// The fetch succeeded; the listing is replaced wholesale.
    pub fn fetch_success(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        self.loading = false;
    }

    /// The fetch failed.
    pub fn fetch_failure(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Append a freshly created entry to the listing.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }
}
