// ============================================================================
// MY BOOKINGS VIEW - Reservas propias: filtro, orden, cancelación
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{confirm, on_change, ElementBuilder};
use crate::state::app_state::AppState;
use crate::state::async_result::AsyncResult;
use crate::utils::i18n::{t, tf};
use crate::viewmodels::BookingSort;
use crate::views::bookings::bookings_table;
use crate::views::shared::{async_block, button, empty_state, maybe_error, page};

pub fn render_my_bookings(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let screen = state.my_bookings.borrow().clone();

    let body = async_block(&screen.bookings, &lang, |_| {
        let visible = screen.visible();
        let (shown, total) = screen.counts();
        let counter = ElementBuilder::new("p")?
            .class("counter")
            .text(&tf("found_of", &lang, &[("shown", shown.to_string().as_str()), ("total", total.to_string().as_str())]))
            .build();

        let list = if visible.is_empty() {
            empty_state(&t("no_bookings", &lang))?
        } else {
            bookings_table(state, &visible, &lang, |booking| {
                let s = state.clone();
                let id = booking.booking_id;
                let question = t("confirm_delete_booking", &lang);
                button(&t("cancel_booking", &lang), "btn btn-danger btn-sm", false, move || {
                    if confirm(&question) {
                        delete_booking(&s, id);
                    }
                })
                .map(Some)
            })?
        };

        Ok(ElementBuilder::new("div")?
            .child(render_toolbar(state, &screen.query, screen.sort, &lang)?)?
            .child(counter)?
            .child(list)?
            .build())
    })?;

    Ok(page("my-bookings-page", &t("my_bookings_title", &lang))?
        .child_opt(maybe_error(screen.action_error.as_ref(), &lang)?)?
        .child(body)?
        .build())
}

fn render_toolbar(state: &AppState, query: &str, sort: BookingSort, lang: &str) -> Result<Element, JsValue> {
    let filter = ElementBuilder::new("input")?
        .id("my-bookings-filter")?
        .class("form-control")
        .attr("type", "search")?
        .attr("value", query)?
        .attr("placeholder", &t("filter_bookings", lang))?
        .build();
    let s = state.clone();
    // Re-render al confirmar (change), no en cada tecla
    on_change(&filter, move |value| {
        s.my_bookings.borrow_mut().query = value;
        s.notify();
    })?;

    let options = [(BookingSort::Newest, "sort_newest"), (BookingSort::Oldest, "sort_oldest")]
        .iter()
        .map(|(value, key)| {
            ElementBuilder::new("option")?
                .attr("value", value.as_str())?
                .flag("selected", *value == sort)
                .map(|b| b.text(&t(key, lang)).build())
        })
        .collect::<Result<Vec<_>, JsValue>>()?;
    let select = ElementBuilder::new("select")?
        .class("form-control")
        .children(options)?
        .build();
    let s = state.clone();
    on_change(&select, move |value| {
        s.my_bookings.borrow_mut().sort = BookingSort::parse(&value);
        s.notify();
    })?;

    Ok(ElementBuilder::new("div")?
        .class("toolbar")
        .child(filter)?
        .child(select)?
        .build())
}

fn delete_booking(state: &AppState, booking_id: i64) {
    state.my_bookings.borrow_mut().action_error = None;
    let state = state.clone();
    spawn_local(async move {
        let result = state.booking_vm().delete_mine(booking_id).await;
        {
            let mut screen = state.my_bookings.borrow_mut();
            match result {
                Ok(bookings) => screen.bookings = AsyncResult::Success(bookings),
                Err(e) => screen.action_error = Some(e.user_message("booking_delete_failed")),
            }
        }
        state.notify();
    });
}
