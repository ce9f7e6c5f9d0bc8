/// Clave de localStorage para el token bearer
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Clave de localStorage para el rol del usuario
pub const USER_ROLE_KEY: &str = "userRole";

/// Clave de localStorage para el idioma de la interfaz
pub const LANGUAGE_KEY: &str = "language";

/// Vista de entrada (login)
pub const LOGIN_PATH: &str = "/login";

/// Vista por defecto para usuarios sin privilegios de admin
pub const DEFAULT_PATH: &str = "/search";

/// Vista tras login / registro
pub const AFTER_LOGIN_PATH: &str = "/companies";

/// Rol con acceso al panel de administración
pub const ADMIN_ROLE: &str = "admin";

/// Rol asignado por defecto al registrarse
pub const CUSTOMER_ROLE: &str = "customer";

/// Estado inicial de una reserva
pub const BOOKING_REQUESTED_STATUS: &str = "requested";
