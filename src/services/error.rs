use thiserror::Error;

/// Errores de la capa HTTP
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401: credencial inválida o expirada (la sesión ya se limpió)
    #[error("unauthorized")]
    Unauthorized,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Texto del servidor, si lo hay (p.ej. "user with this email already exists")
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => {
                let trimmed = message.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }
}
