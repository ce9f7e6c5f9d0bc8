// ============================================================================
// SESSION STORE - Credencial bearer + rol, persistidos en localStorage
// ============================================================================
// Único escritor de la sesión: login/registro (set), logout y el manejador
// de 401 (clear). Guardas y ApiClient solo leen.
// ============================================================================

use std::rc::Rc;

use crate::models::auth::Role;
use crate::utils::constants::{AUTH_TOKEN_KEY, USER_ROLE_KEY};
use crate::utils::storage::StorageBackend;

/// Lectura cruda del almacenamiento
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub credential: Option<String>,
    pub role: Option<String>,
}

/// Interpretación de la sesión para decisiones de acceso
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAccess {
    Anonymous,
    Authenticated(Option<Role>),
}

impl SessionSnapshot {
    /// El rol solo cuenta si hay credencial
    pub fn access(&self) -> SessionAccess {
        match self.credential.as_deref() {
            Some(token) if !token.is_empty() => {
                SessionAccess::Authenticated(self.role.as_deref().map(Role::parse))
            }
            _ => SessionAccess::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.access(), SessionAccess::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.access(), SessionAccess::Authenticated(Some(Role::Admin)))
    }

    /// Token utilizable para el header Authorization
    pub fn bearer(&self) -> Option<&str> {
        self.credential.as_deref().filter(|token| !token.is_empty())
    }
}

/// Contexto de sesión inyectable (se clona barato: comparte backend)
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Persistir credencial y rol
    pub fn set(&self, credential: &str, role: &str) {
        if let Err(e) = self.backend.set_item(AUTH_TOKEN_KEY, credential) {
            log::error!("❌ [SESSION] Error guardando token: {}", e);
        }
        if let Err(e) = self.backend.set_item(USER_ROLE_KEY, role) {
            log::error!("❌ [SESSION] Error guardando rol: {}", e);
        }
        log::info!("💾 [SESSION] Sesión guardada (rol: {})", role);
    }

    pub fn get(&self) -> SessionSnapshot {
        SessionSnapshot {
            credential: self.read(AUTH_TOKEN_KEY),
            role: self.read(USER_ROLE_KEY),
        }
    }

    /// Borrar ambos valores
    pub fn clear(&self) {
        for key in [AUTH_TOKEN_KEY, USER_ROLE_KEY] {
            if let Err(e) = self.backend.remove_item(key) {
                log::error!("❌ [SESSION] Error eliminando {}: {}", key, e);
            }
        }
        log::info!("🗑️ [SESSION] Sesión eliminada");
    }

    pub fn credential(&self) -> Option<String> {
        self.get().bearer().map(str::to_string)
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.get().is_admin()
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("⚠️ [SESSION] Error leyendo {}: {}", key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn set_then_get_survives_reload() {
        let storage = MemoryStorage::new();
        SessionStore::new(Rc::new(storage.clone())).set("jwt-1", "admin");

        let reloaded = SessionStore::new(Rc::new(storage.clone()));
        let snapshot = reloaded.get();
        assert_eq!(snapshot.credential.as_deref(), Some("jwt-1"));
        assert_eq!(snapshot.role.as_deref(), Some("admin"));
        assert!(reloaded.is_admin());
    }

    #[test]
    fn clear_removes_both_values() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(Rc::new(storage.clone()));
        store.set("jwt-1", "customer");
        store.clear();

        assert_eq!(store.get(), SessionSnapshot::default());
        assert!(storage.is_empty());
    }

    #[test]
    fn role_without_credential_is_anonymous() {
        let snapshot = SessionSnapshot {
            credential: None,
            role: Some("admin".to_string()),
        };
        assert_eq!(snapshot.access(), SessionAccess::Anonymous);
        assert!(!snapshot.is_admin());

        let empty_token = SessionSnapshot {
            credential: Some(String::new()),
            role: Some("admin".to_string()),
        };
        assert_eq!(empty_token.bearer(), None);
        assert!(!empty_token.is_authenticated());
    }

    #[test]
    fn padded_admin_role_is_not_admin() {
        let snapshot = SessionSnapshot {
            credential: Some("jwt".to_string()),
            role: Some("admin ".to_string()),
        };
        assert!(snapshot.is_authenticated());
        assert!(!snapshot.is_admin());
    }
}
