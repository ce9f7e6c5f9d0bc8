mod login_view;
mod register_view;
mod profile_view;

pub use login_view::*;
pub use register_view::*;
pub use profile_view::*;
