// ============================================================================
// ROUTER - Rutas + guardas + navegación
// ============================================================================

pub mod route;
pub mod guard;
pub mod navigator;

pub use route::{Access, Route};
pub use guard::{evaluate, GuardDecision};
pub use navigator::{BrowserNavigator, MemoryNavigator, Navigator};

use std::rc::Rc;

use crate::state::session_state::SessionStore;
use crate::utils::constants::{DEFAULT_PATH, LOGIN_PATH};

/// Resuelve qué vista se pinta para un path, aplicando las guardas
#[derive(Clone)]
pub struct Router {
    session: SessionStore,
    navigator: Rc<dyn Navigator>,
}

impl Router {
    pub fn new(session: SessionStore, navigator: Rc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        self.navigator.clone()
    }

    /// Evaluar la guarda de `path` con la sesión actual. En caso de redirección
    /// se reemplaza la entrada del historial y se devuelve la vista destino.
    pub fn resolve(&self, path: &str) -> Route {
        let route = Route::parse(path);
        let snapshot = self.session.get();

        match evaluate(route.access(), &snapshot) {
            GuardDecision::Granted => route,
            GuardDecision::RedirectToLogin => {
                log::info!("🔒 [ROUTER] {} requiere sesión, redirigiendo a login", path);
                self.navigator.replace(LOGIN_PATH);
                Route::Login
            }
            GuardDecision::RedirectToDefault => {
                log::info!("🚫 [ROUTER] {} requiere rol admin, redirigiendo a {}", path, DEFAULT_PATH);
                self.navigator.replace(DEFAULT_PATH);
                // La vista por defecto solo exige sesión, que existe
                Route::parse(DEFAULT_PATH)
            }
        }
    }

    /// Navegar a `path` (nueva entrada de historial) y resolver la vista
    pub fn navigate(&self, path: &str) -> Route {
        if self.navigator.current_path() != path {
            self.navigator.push(path);
        }
        self.resolve(path)
    }

    /// Resolver el path actual del navegador (arranque, popstate, re-render)
    pub fn resolve_current(&self) -> Route {
        let path = self.navigator.current_path();
        self.resolve(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    fn router_with(storage: &MemoryStorage, start: &str) -> (Router, MemoryNavigator, SessionStore) {
        let session = SessionStore::new(Rc::new(storage.clone()));
        let navigator = MemoryNavigator::new(start);
        let router = Router::new(session.clone(), Rc::new(navigator.clone()));
        (router, navigator, session)
    }

    #[test]
    fn anonymous_user_is_sent_to_login_without_back_entry() {
        let storage = MemoryStorage::new();
        let (router, navigator, _) = router_with(&storage, "/");

        assert_eq!(router.navigate("/companies"), Route::Login);
        assert_eq!(navigator.history(), vec!["/".to_string(), "/login".to_string()]);
    }

    #[test]
    fn customer_hitting_admin_lands_on_default_view() {
        let storage = MemoryStorage::new();
        let (router, navigator, session) = router_with(&storage, "/");
        session.set("token", "customer");

        assert_eq!(router.navigate("/admin/users"), Route::Search);
        assert_eq!(navigator.current_path(), "/search");
    }

    #[test]
    fn decision_is_not_cached_between_renders() {
        let storage = MemoryStorage::new();
        let (router, _, session) = router_with(&storage, "/profile");
        session.set("token", "admin");
        assert_eq!(router.resolve_current(), Route::Profile);

        session.clear();
        assert_eq!(router.resolve_current(), Route::Login);
    }
}
