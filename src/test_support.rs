//! Dobles de prueba compartidos por los tests unitarios y de integración.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::router::{MemoryNavigator, Navigator, Router};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::services::http::{ApiRequest, ApiResponse, HttpTransport};
use crate::state::app_state::AppState;
use crate::state::session_state::SessionStore;
use crate::utils::storage::MemoryStorage;

pub const TEST_BASE_URL: &str = "http://api.test";

pub fn ok_json(body: &str) -> Result<ApiResponse, ApiError> {
    status(200, body)
}

pub fn status(code: u16, body: &str) -> Result<ApiResponse, ApiError> {
    Ok(ApiResponse {
        status: code,
        body: body.to_string(),
    })
}

/// Transporte con respuestas fijas por "METHOD /path". Sin ruta ni
/// respuesta por defecto: error de red.
#[derive(Clone, Default)]
pub struct StubTransport {
    routes: Rc<RefCell<HashMap<String, Result<ApiResponse, ApiError>>>>,
    fallback: Rc<RefCell<Option<Result<ApiResponse, ApiError>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl StubTransport {
    pub fn route(&self, key: &str, response: Result<ApiResponse, ApiError>) -> &Self {
        self.routes.borrow_mut().insert(key.to_string(), response);
        self
    }

    /// Respuesta para cualquier ruta sin stub
    pub fn otherwise(&self, response: Result<ApiResponse, ApiError>) {
        *self.fallback.borrow_mut() = Some(response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.url.trim_start_matches(TEST_BASE_URL)))
            .collect()
    }
}

#[async_trait(?Send)]
impl HttpTransport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let key = format!(
            "{} {}",
            request.method.as_str(),
            request.url.trim_start_matches(TEST_BASE_URL)
        );
        self.requests.borrow_mut().push(request);
        self.routes
            .borrow()
            .get(&key)
            .cloned()
            .or_else(|| self.fallback.borrow().clone())
            .unwrap_or_else(|| Err(ApiError::Network(format!("no stub for {}", key))))
    }
}

/// Sesión + navegador + transporte + cliente cableados como en la app
pub struct TestHarness {
    pub storage: MemoryStorage,
    pub session: SessionStore,
    pub navigator: MemoryNavigator,
    pub transport: StubTransport,
    pub api: ApiClient,
    pub router: Router,
}

impl TestHarness {
    pub fn new(start_path: &str) -> Self {
        let storage = MemoryStorage::new();
        let session = SessionStore::new(Rc::new(storage.clone()));
        let navigator = MemoryNavigator::new(start_path);
        let transport = StubTransport::default();
        let api = ApiClient::new(
            TEST_BASE_URL,
            Rc::new(transport.clone()),
            session.clone(),
            Rc::new(navigator.clone()),
        );
        let router = Router::new(session.clone(), Rc::new(navigator.clone()));
        Self {
            storage,
            session,
            navigator,
            transport,
            api,
            router,
        }
    }
}

/// AppState completo sobre almacenamiento, navegador y transporte en memoria
pub struct TestApp {
    pub state: AppState,
    pub storage: MemoryStorage,
    pub navigator: MemoryNavigator,
    pub transport: StubTransport,
}

impl TestApp {
    pub fn start(path: &str) -> Self {
        Self::with_storage(MemoryStorage::new(), path)
    }

    /// Arrancar sobre un almacenamiento existente (recarga de página)
    pub fn with_storage(storage: MemoryStorage, path: &str) -> Self {
        let navigator = MemoryNavigator::new(path);
        let transport = StubTransport::default();
        let state = AppState::new(
            Rc::new(storage.clone()),
            Rc::new(navigator.clone()),
            Rc::new(transport.clone()),
            TEST_BASE_URL,
        );
        Self {
            state,
            storage,
            navigator,
            transport,
        }
    }

    pub fn reload(&self) -> Self {
        Self::with_storage(self.storage.clone(), &self.current_path())
    }

    pub fn current_path(&self) -> String {
        self.navigator.current_path()
    }
}
