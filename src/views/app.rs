// ============================================================================
// APP VIEW - Layout + vista de la ruta actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::Route;
use crate::state::app_state::AppState;
use crate::views::admin::{
    render_admin_dashboard, render_admin_user_bookings, render_admin_users, render_analytics,
};
use crate::views::auth::{render_login, render_profile, render_register};
use crate::views::bookings::{
    render_booking_details, render_bookings, render_my_bookings, render_new_booking,
};
use crate::views::companies::render_companies;
use crate::views::home::render_home;
use crate::views::my_services::render_my_services;
use crate::views::search::render_search;
use crate::views::services::render_services;
use crate::views::shared::{render_footer, render_header, render_navbar};

/// Renderizar la app completa para la ruta ya resuelta por la guarda
pub fn render_app(state: &AppState, route: &Route) -> Result<Element, JsValue> {
    let content = match route {
        Route::Home => render_home(state)?,
        Route::Login => render_login(state)?,
        Route::Register => render_register(state)?,
        Route::Profile => render_profile(state)?,
        Route::Companies => render_companies(state)?,
        Route::Services => render_services(state)?,
        Route::MyServices => render_my_services(state)?,
        Route::Search => render_search(state)?,
        Route::Bookings => render_bookings(state)?,
        Route::NewBooking => render_new_booking(state)?,
        Route::MyBookings => render_my_bookings(state)?,
        Route::BookingDetails(_) => render_booking_details(state)?,
        Route::Admin => render_admin_dashboard(state)?,
        Route::AdminUsers => render_admin_users(state)?,
        Route::AdminAnalytics => render_analytics(state)?,
        Route::AdminUserBookings(_) => render_admin_user_bookings(state)?,
    };

    let main = ElementBuilder::new("main")?
        .class("app-main")
        .child(content)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("app-container")
        .child_opt(render_header(state, route)?)?
        .child_opt(render_navbar(state, route)?)?
        .child(main)?
        .child_opt(render_footer(state, route)?)?
        .build())
}
