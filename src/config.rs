use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub default_language: String,
    pub app_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8082".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            default_language: "RU".to_string(),
            app_title: "OilGas Booking".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            default_language: option_env!("DEFAULT_LANGUAGE")
                .map(|l| l.to_uppercase())
                .unwrap_or(defaults.default_language),
            app_title: option_env!("APP_TITLE")
                .map(str::to_string)
                .unwrap_or(defaults.app_title),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            log::Level::Error
        } else if self.is_production() {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_logging_only_reports_errors() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Error);
    }

    #[test]
    fn production_logs_at_info() {
        let config = AppConfig {
            environment: "production".to_string(),
            ..AppConfig::default()
        };
        assert!(config.is_production());
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
