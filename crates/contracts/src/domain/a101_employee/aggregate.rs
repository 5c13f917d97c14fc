use serde::{Deserialize, Serialize};

/// Employee of a merchant, as listed by `GET /merchants/employees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(deserialize_with = "crate::shared::serde_ext::id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Body of `POST /merchants/employees`.
///
/// Field formats are validated by the server; the client sends what was typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeDto {
    pub name: String,
    pub email: String,
    pub password: String,
}
