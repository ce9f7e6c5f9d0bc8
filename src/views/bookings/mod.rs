mod list_view;
mod my_bookings_view;
mod details_view;
mod new_booking_view;

pub use list_view::*;
pub use my_bookings_view::*;
pub use details_view::*;
pub use new_booking_view::*;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::models::Booking;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::shared::{link, row, status_badge, table, text};

/// Tabla de reservas compartida por los listados
pub(crate) fn bookings_table(
    state: &AppState,
    bookings: &[Booking],
    lang: &str,
    mut extra: impl FnMut(&Booking) -> Result<Option<Element>, JsValue>,
) -> Result<Element, JsValue> {
    let headers = [
        t("id", lang),
        t("status", lang),
        t("description", lang),
        t("actions", lang),
    ];
    let rows = bookings
        .iter()
        .map(|booking| {
            let actions = link(
                state,
                &format!("/bookings/{}", booking.booking_id),
                &t("details", lang),
                "btn btn-secondary btn-sm",
            )?;
            if let Some(el) = extra(booking)? {
                actions.append_child(&el)?;
            }
            row(vec![
                text(&format!("#{}", booking.booking_id))?,
                status_badge(&booking.status)?,
                text(booking.description.as_deref().unwrap_or(""))?,
                actions,
            ])
        })
        .collect::<Result<Vec<_>, _>>()?;
    table(&headers, rows)
}
