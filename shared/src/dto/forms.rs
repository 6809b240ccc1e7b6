use serde::{Deserialize, Serialize};

/// Employee form record, alive for one screen interaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EmployeeFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
}

/// Login form record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LoginFormData {
    pub username: String,
    pub password: String,
}
