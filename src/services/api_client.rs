// ============================================================================
// API CLIENT - Comunicación HTTP autenticada
// ============================================================================
// Todas las llamadas pasan por `execute`: añade el Bearer de la sesión y
// reacciona a 401 (limpia sesión + navegación completa a /login). El resto de
// status se devuelven tal cual; los helpers tipados los interpretan.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::booking::BookingServiceCreate;
use crate::models::company::{CompanyPayload, CompanyServiceCreate};
use crate::models::service::ServicePayload;
use crate::models::{
    ActiveUser, Booking, BookingCreateRequest, BookingService, Company, CompanyOffer,
    CompanyService, LoginRequest, Me, RegisterRequest, Service, TokenResponse, User,
};
use crate::router::Navigator;
use crate::services::error::ApiError;
use crate::services::http::{ApiRequest, ApiResponse, HttpTransport, Method};
use crate::state::session_state::SessionStore;
use crate::utils::constants::LOGIN_PATH;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    session: SessionStore,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        transport: Rc<dyn HttpTransport>,
        session: SessionStore,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            session,
            navigator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ------------------------------------------------------------------------
    // Autenticador
    // ------------------------------------------------------------------------

    /// Enviar una request autenticada
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let mut request = ApiRequest::new(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.session.credential() {
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        if body.is_some() {
            request
                .headers
                .push(("Content-Type".to_string(), "application/json".to_string()));
        }
        request.body = body;

        log::debug!("🌐 [API] {} {}", method.as_str(), path);
        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ [API] {} {} falló: {}", method.as_str(), path, e);
            e
        })?;

        if response.status == 401 {
            log::warn!("🔒 [API] 401 en {} {}: cerrando sesión", method.as_str(), path);
            self.session.clear();
            self.navigator.force_navigate(LOGIN_PATH);
            return Err(ApiError::Unauthorized);
        }

        Ok(response)
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let response = ensure_success(self.execute(method, path, body).await?)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn request_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<(), ApiError> {
        ensure_success(self.execute(method, path, body).await?).map(|_| ())
    }

    /// Listas: un body que no es array se trata como lista vacía
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let response = ensure_success(self.execute(Method::Get, path, None).await?)?;
        let value: serde_json::Value = match serde_json::from_str(&response.body) {
            Ok(value) => value,
            Err(_) => return Ok(Vec::new()),
        };
        if !value.is_array() {
            return Ok(Vec::new());
        }
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    // ------------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------------

    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = to_body(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        self.request_json(Method::Post, "/auth/login", Some(body)).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        self.request_json(Method::Post, "/auth/register", Some(to_body(request)?))
            .await
    }

    pub async fn me(&self) -> Result<Me, ApiError> {
        self.request_json(Method::Get, "/auth/me", None).await
    }

    // ------------------------------------------------------------------------
    // Compañías
    // ------------------------------------------------------------------------

    pub async fn my_companies(&self) -> Result<Vec<Company>, ApiError> {
        self.get_list("/companies/my").await
    }

    pub async fn create_company(&self, name: &str) -> Result<(), ApiError> {
        let body = to_body(&CompanyPayload { name: name.to_string() })?;
        self.request_empty(Method::Post, "/companies", Some(body)).await
    }

    pub async fn rename_company(&self, company_id: i64, name: &str) -> Result<(), ApiError> {
        let body = to_body(&CompanyPayload { name: name.to_string() })?;
        self.request_empty(Method::Put, &format!("/companies/{}", company_id), Some(body))
            .await
    }

    pub async fn delete_company(&self, company_id: i64) -> Result<(), ApiError> {
        self.request_empty(Method::Delete, &format!("/companies/{}", company_id), None)
            .await
    }

    // ------------------------------------------------------------------------
    // Servicios
    // ------------------------------------------------------------------------

    pub async fn services(&self) -> Result<Vec<Service>, ApiError> {
        self.get_list("/services").await
    }

    pub async fn create_service(&self, title: &str) -> Result<Service, ApiError> {
        let body = to_body(&ServicePayload { title: title.to_string() })?;
        self.request_json(Method::Post, "/services", Some(body)).await
    }

    pub async fn rename_service(&self, service_id: i64, title: &str) -> Result<(), ApiError> {
        let body = to_body(&ServicePayload { title: title.to_string() })?;
        self.request_empty(Method::Put, &format!("/services/{}", service_id), Some(body))
            .await
    }

    pub async fn my_company_services(&self) -> Result<Vec<CompanyService>, ApiError> {
        self.get_list("/company-services/my").await
    }

    pub async fn bind_service(&self, company_id: i64, service_id: i64) -> Result<(), ApiError> {
        let body = to_body(&CompanyServiceCreate { company_id, service_id })?;
        self.request_empty(Method::Post, "/company-services", Some(body)).await
    }

    pub async fn unbind_service(&self, company_service_id: i64) -> Result<(), ApiError> {
        let path = format!("/company-services/{}", company_service_id);
        self.request_empty(Method::Delete, &path, None).await
    }

    /// Compañías que ofrecen un servicio (por título exacto)
    pub async fn companies_by_service(&self, title: &str) -> Result<Vec<CompanyOffer>, ApiError> {
        let path = format!(
            "/business/companies-by-service/{}",
            urlencoding::encode(title)
        );
        self.get_list(&path).await
    }

    // ------------------------------------------------------------------------
    // Reservas
    // ------------------------------------------------------------------------

    pub async fn bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_list("/bookings").await
    }

    pub async fn bookings_of_user(&self, user_id: i64) -> Result<Vec<Booking>, ApiError> {
        self.get_list(&format!("/bookings?user_id={}", user_id)).await
    }

    pub async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_list("/bookings/me").await
    }

    pub async fn booking(&self, booking_id: i64) -> Result<Booking, ApiError> {
        self.request_json(Method::Get, &format!("/bookings/{}", booking_id), None)
            .await
    }

    pub async fn booking_services(&self, booking_id: i64) -> Result<Vec<BookingService>, ApiError> {
        self.get_list(&format!("/bookings/{}/services", booking_id)).await
    }

    pub async fn create_booking(&self, request: &BookingCreateRequest) -> Result<Booking, ApiError> {
        self.request_json(Method::Post, "/bookings", Some(to_body(request)?))
            .await
    }

    pub async fn delete_my_booking(&self, booking_id: i64) -> Result<(), ApiError> {
        let path = format!("/bookings/{}/me", booking_id);
        self.request_empty(Method::Delete, &path, None).await
    }

    pub async fn add_booking_service(&self, request: &BookingServiceCreate) -> Result<(), ApiError> {
        self.request_empty(Method::Post, "/booking-services", Some(to_body(request)?))
            .await
    }

    // ------------------------------------------------------------------------
    // Administración
    // ------------------------------------------------------------------------

    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get_list("/users").await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.request_empty(Method::Delete, &format!("/users/{}", user_id), None)
            .await
    }

    pub async fn users_with_active_bookings(&self) -> Result<Vec<ActiveUser>, ApiError> {
        self.get_list("/business/users-with-active-bookings").await
    }
}

fn to_body<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn ensure_success(response: ApiResponse) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Http {
            status: response.status,
            message: response.body,
        })
    }
}
