// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod async_result;
pub mod app_state;

pub use reactivity::*;
pub use session_state::*;
pub use async_result::*;
pub use app_state::*;
