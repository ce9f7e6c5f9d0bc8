// ============================================================================
// SERVICES - SOLO comunicación con el backend
// ============================================================================

pub mod error;
pub mod http;
pub mod api_client;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use http::{FetchTransport, HttpTransport};
