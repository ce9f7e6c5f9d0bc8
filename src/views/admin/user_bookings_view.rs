// ============================================================================
// ADMIN USER BOOKINGS VIEW - Reservas de un usuario concreto
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::app_state::AppState;
use crate::utils::i18n::{t, tf};
use crate::views::bookings::bookings_table;
use crate::views::shared::{async_block, empty_state, link, page};

pub fn render_admin_user_bookings(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let screen = state.admin_user_bookings.borrow().clone();
    let title = tf("user_bookings_title", &lang, &[("id", screen.user_id.to_string().as_str())]);

    let body = async_block(&screen.bookings, &lang, |bookings| {
        if bookings.is_empty() {
            return empty_state(&t("no_bookings", &lang));
        }
        bookings_table(state, bookings, &lang, |_| Ok(None))
    })?;

    Ok(page("admin-user-bookings-page", &title)?
        .child(link(state, "/admin/users", &t("back_to_users", &lang), "link")?)?
        .child(body)?
        .build())
}
