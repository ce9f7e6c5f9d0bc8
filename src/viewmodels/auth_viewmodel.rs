// ============================================================================
// AUTH VIEWMODEL - Login, registro, perfil, logout
// ============================================================================

use crate::models::{Me, RegisterRequest, Role};
use crate::services::ApiClient;
use crate::state::async_result::AsyncResult;
use crate::state::session_state::SessionStore;
use crate::viewmodels::{required, ActionError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub submitting: bool,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub submitting: bool,
    pub status: Option<String>,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Customer,
            submitting: false,
            status: None,
        }
    }
}

impl RegisterForm {
    pub fn to_request(&self) -> Result<RegisterRequest, ActionError> {
        Ok(RegisterRequest {
            name: required(&self.name, "fill_all_fields")?,
            email: required(&self.email, "fill_all_fields")?,
            password: required(&self.password, "fill_all_fields")?,
            role: self.role.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileScreen {
    pub me: AsyncResult<Me>,
}

/// ViewModel de autenticación - único escritor de la sesión junto al 401
#[derive(Clone)]
pub struct AuthViewModel {
    api: ApiClient,
    session: SessionStore,
}

impl AuthViewModel {
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// Login: guarda token + rol y devuelve el rol
    pub async fn login(&self, email: &str, password: &str) -> Result<Role, ActionError> {
        let email = required(email, "fill_all_fields")?;
        let password = required(password, "fill_all_fields")?;

        log::info!("🔐 [LOGIN] Iniciando login para {}", email);
        let response = self.api.login(&email, &password).await?;
        self.session.set(&response.token, response.role.as_str());
        log::info!("✅ [LOGIN] Login exitoso (rol: {})", response.role);
        Ok(response.role)
    }

    /// Registro: el backend devuelve token + rol, la sesión queda abierta
    pub async fn register(&self, form: &RegisterForm) -> Result<Role, ActionError> {
        let request = form.to_request()?;
        log::info!("📝 [REGISTER] Registrando {} como {}", request.email, request.role);
        let response = self.api.register(&request).await?;
        self.session.set(&response.token, response.role.as_str());
        Ok(response.role)
    }

    pub async fn load_profile(&self) -> Result<Me, ActionError> {
        Ok(self.api.me().await?)
    }

    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.session.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::error::ApiError;
    use crate::test_support::{ok_json, status, TestHarness};
    use futures::executor::block_on;

    fn vm(harness: &TestHarness) -> AuthViewModel {
        AuthViewModel::new(harness.api.clone(), harness.session.clone())
    }

    #[test]
    fn login_persists_token_and_role() {
        let harness = TestHarness::new("/login");
        harness.transport.route(
            "POST /auth/login",
            ok_json(r#"{"token":"jwt","role":"admin","user":{"id":1,"email":"a@b.c","role":"admin"}}"#),
        );

        let role = block_on(vm(&harness).login(" a@b.c ", "pw")).unwrap();
        assert_eq!(role, Role::Admin);
        let snapshot = harness.session.get();
        assert_eq!(snapshot.credential.as_deref(), Some("jwt"));
        assert_eq!(snapshot.role.as_deref(), Some("admin"));
    }

    #[test]
    fn empty_fields_never_reach_the_server() {
        let harness = TestHarness::new("/login");
        let result = block_on(vm(&harness).login("", "pw"));
        assert_eq!(result, Err(ActionError::Validation("fill_all_fields")));
        assert!(harness.transport.requests().is_empty());
    }

    #[test]
    fn rejected_login_leaves_no_session() {
        let harness = TestHarness::new("/login");
        harness.transport.route("POST /auth/login", status(401, "invalid credentials"));

        let result = block_on(vm(&harness).login("a@b.c", "bad"));
        assert_eq!(result, Err(ActionError::Api(ApiError::Unauthorized)));
        assert!(!harness.session.is_authenticated());
    }

    #[test]
    fn register_opens_session_with_returned_role() {
        let harness = TestHarness::new("/register");
        harness.transport.route("POST /auth/register", ok_json(r#"{"token":"new","role":"customer"}"#));

        let form = RegisterForm {
            name: "Ivan".to_string(),
            email: "ivan@oilgas.ru".to_string(),
            password: "secret".to_string(),
            ..RegisterForm::default()
        };
        assert_eq!(block_on(vm(&harness).register(&form)), Ok(Role::Customer));
        assert!(harness.session.is_authenticated());

        let body = harness.transport.requests()[0].body.clone().unwrap_or_default();
        assert!(body.contains(r#""role":"customer""#));
    }

    #[test]
    fn logout_clears_session() {
        let harness = TestHarness::new("/profile");
        harness.session.set("jwt", "customer");
        vm(&harness).logout();
        assert!(!harness.session.is_authenticated());
    }
}
