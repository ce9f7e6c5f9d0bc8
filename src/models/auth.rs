use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::constants::{ADMIN_ROLE, CUSTOMER_ROLE};

/// Rol del usuario tal como lo devuelve el backend ("admin", "customer", ...)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Customer,
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw {
            ADMIN_ROLE => Role::Admin,
            CUSTOMER_ROLE => Role::Customer,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => ADMIN_ROLE,
            Role::Customer => CUSTOMER_ROLE,
            Role::Other(raw) => raw,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Customer
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::parse(&raw))
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Respuesta de /auth/login y /auth/register
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub user: Option<TokenUser>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

/// Perfil del usuario autenticado (/auth/me)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Me {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

impl Me {
    /// Iniciales para el avatar ("Ivan Petrov" -> "IP")
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_carries_role() {
        let json = r#"{"token":"abc","role":"admin","user":{"id":1,"email":"admin@oilgas.ru","role":"admin"}}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "abc");
        assert!(response.role.is_admin());
        assert_eq!(response.user.map(|u| u.id), Some(1));
    }

    #[test]
    fn unknown_roles_are_kept_verbatim() {
        let role: Role = serde_json::from_str(r#""operator""#).unwrap();
        assert_eq!(role, Role::Other("operator".to_string()));
        assert_eq!(serde_json::to_string(&role).unwrap(), r#""operator""#);
    }

    #[test]
    fn admin_role_matches_exactly() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert!(!Role::parse(" admin").is_admin());
        assert!(!Role::parse("admin ").is_admin());
        assert!(!Role::parse("Admin").is_admin());
    }

    #[test]
    fn initials_fall_back_to_u() {
        let mut me = Me { id: 1, name: "ivan petrov".to_string(), email: None, role: Role::Customer };
        assert_eq!(me.initials(), "IP");
        me.name = "   ".to_string();
        assert_eq!(me.initials(), "U");
    }
}
