use std::fmt;

use serde::{Deserialize, Serialize};

/// Known departments, in the rotation order used when assigning demo data.
///
/// The department form validator deliberately does not check membership in
/// this list; any short non-empty value is accepted there.
pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
    "Operations",
    "Design",
    "Product",
];

/// Employment status of a directory entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    Inactive,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
            EmployeeStatus::OnLeave => "On Leave",
        };
        write!(f, "{}", label)
    }
}

/// One entry in the employee directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub status: EmployeeStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_labels() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::OnLeave).unwrap(),
            "\"On Leave\""
        );
        assert_eq!(
            serde_json::from_str::<EmployeeStatus>("\"Active\"").unwrap(),
            EmployeeStatus::Active
        );
        assert_eq!(EmployeeStatus::OnLeave.to_string(), "On Leave");
    }

    #[test]
    fn test_employee_round_trip() {
        let employee = Employee {
            id: 7,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            phone: "5551234567".to_string(),
            department: "Engineering".to_string(),
            status: EmployeeStatus::Active,
        };

        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, employee);
    }
}
