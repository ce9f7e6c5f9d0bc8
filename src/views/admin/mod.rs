mod dashboard_view;
mod users_view;
mod analytics_view;
mod user_bookings_view;

pub use dashboard_view::*;
pub use users_view::*;
pub use analytics_view::*;
pub use user_bookings_view::*;
