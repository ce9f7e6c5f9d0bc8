// ============================================================================
// ASYNC RESULT - Estado uniforme de cada carga: pending / success / failure
// ============================================================================

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum AsyncResult<T> {
    Pending,
    Success(T),
    /// Mensaje para el usuario: clave i18n o texto del servidor
    Failure(String),
}

impl<T> Default for AsyncResult<T> {
    fn default() -> Self {
        AsyncResult::Pending
    }
}

impl<T> AsyncResult<T> {
    /// Convertir un resultado; en error se muestra `message` y se loguea la causa
    pub fn from_result<E: Display>(result: Result<T, E>, message: &str) -> Self {
        match result {
            Ok(data) => AsyncResult::Success(data),
            Err(e) => {
                log::error!("❌ {}: {}", message, e);
                AsyncResult::Failure(message.to_string())
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AsyncResult::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            AsyncResult::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            AsyncResult::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AsyncResult::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> AsyncResult<U> {
        match self {
            AsyncResult::Pending => AsyncResult::Pending,
            AsyncResult::Success(data) => AsyncResult::Success(f(data)),
            AsyncResult::Failure(message) => AsyncResult::Failure(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_keeps_only_the_user_message() {
        let result: AsyncResult<u32> = AsyncResult::from_result(Err("HTTP 500"), "load_failed");
        assert_eq!(result.error(), Some("load_failed"));
        assert_eq!(result.data(), None);
    }

    #[test]
    fn map_preserves_state() {
        assert_eq!(AsyncResult::Success(2).map(|n| n * 2), AsyncResult::Success(4));
        assert!(AsyncResult::<u32>::Pending.map(|n| n + 1).is_pending());
    }
}
