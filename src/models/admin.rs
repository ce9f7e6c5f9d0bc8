use serde::{Deserialize, Serialize};

use crate::models::auth::Role;

/// Usuario (vista de administración)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Role", default)]
    pub role: Role,
}

/// Usuario con reservas activas (/business/users-with-active-bookings)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveUser {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub active_bookings: i64,
}
