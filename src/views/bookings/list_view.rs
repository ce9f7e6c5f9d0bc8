// ============================================================================
// BOOKINGS VIEW - Todas las reservas visibles para el usuario
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::bookings::bookings_table;
use crate::views::shared::{async_block, empty_state, link, page};

pub fn render_bookings(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let screen = state.bookings.borrow().clone();

    let body = async_block(&screen.bookings, &lang, |bookings| {
        if bookings.is_empty() {
            return empty_state(&t("no_bookings", &lang));
        }
        bookings_table(state, bookings, &lang, |_| Ok(None))
    })?;

    Ok(page("bookings-page", &t("bookings_title", &lang))?
        .child(link(state, "/bookings/new", &t("new_booking", &lang), "btn btn-primary")?)?
        .child(body)?
        .build())
}
