// ============================================================================
// VIEWMODELS - Lógica de cada pantalla
// ============================================================================
// Devuelven valores; AppState/vistas actualizan el estado y re-renderizan.
// ============================================================================

pub mod auth_viewmodel;
pub mod company_viewmodel;
pub mod catalog_viewmodel;
pub mod search_viewmodel;
pub mod booking_viewmodel;
pub mod admin_viewmodel;

pub use auth_viewmodel::{AuthViewModel, LoginForm, ProfileScreen, RegisterForm};
pub use company_viewmodel::{CompaniesScreen, CompanyViewModel};
pub use catalog_viewmodel::{CatalogViewModel, MyServicesData, MyServicesScreen, ServicesScreen};
pub use search_viewmodel::{filter_suggestions, SearchNotice, SearchScreen, SearchViewModel};
pub use booking_viewmodel::{
    filter_bookings, BookingDetails, BookingDetailsScreen, BookingSort, BookingViewModel,
    BookingsScreen, MyBookingsScreen, NewBookingForm,
};
pub use admin_viewmodel::{AdminUserBookingsScreen, AdminUsersScreen, AdminViewModel, AnalyticsScreen};

use thiserror::Error;

use crate::services::error::ApiError;

/// Error de una acción de usuario (formulario o botón)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// Comprobación local; el valor es la clave i18n a mostrar
    #[error("validation failed: {0}")]
    Validation(&'static str),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ActionError {
    /// Mensaje para la pantalla: la clave de validación o el genérico de la pantalla
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ActionError::Validation(key) => (*key).to_string(),
            ActionError::Api(_) => fallback.to_string(),
        }
    }

    /// Igual que `user_message` pero prefiriendo el texto del servidor
    pub fn server_or(&self, fallback: &str) -> String {
        match self {
            ActionError::Api(api) => api
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
            other => other.user_message(fallback),
        }
    }
}

/// Campo obligatorio: recortado y no vacío
pub(crate) fn required(value: &str, key: &'static str) -> Result<String, ActionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ActionError::Validation(key))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Campo numérico obligatorio
pub(crate) fn required_id(value: &str, key: &'static str) -> Result<i64, ActionError> {
    required(value, key)?
        .parse::<i64>()
        .map_err(|_| ActionError::Validation(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_keys() {
        assert_eq!(required("  ", "name_required"), Err(ActionError::Validation("name_required")));
        assert_eq!(required(" Rig ", "name_required"), Ok("Rig".to_string()));
        assert_eq!(required_id("12", "id_required"), Ok(12));
        assert_eq!(required_id("x", "id_required"), Err(ActionError::Validation("id_required")));
    }

    #[test]
    fn server_text_wins_when_present() {
        let err = ActionError::Api(ApiError::Http {
            status: 400,
            message: "user with this email already exists\n".to_string(),
        });
        assert_eq!(err.server_or("register_failed"), "user with this email already exists");
        assert_eq!(err.user_message("register_failed"), "register_failed");

        let network = ActionError::Api(ApiError::Network("offline".to_string()));
        assert_eq!(network.server_or("register_failed"), "register_failed");
    }
}
