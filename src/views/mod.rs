// ============================================================================
// VIEWS - Funciones que renderizan DOM (sin lógica de negocio)
// ============================================================================

pub mod app;
pub mod shared;
pub mod home;
pub mod auth;
pub mod companies;
pub mod services;
pub mod my_services;
pub mod search;
pub mod bookings;
pub mod admin;

pub use app::render_app;
