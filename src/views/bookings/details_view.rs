// ============================================================================
// BOOKING DETAILS VIEW - Reserva + servicios (todo o nada)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_submit, ElementBuilder};
use crate::models::BookingService;
use crate::state::app_state::AppState;
use crate::utils::i18n::{t, tf};
use crate::viewmodels::BookingDetails;
use crate::views::shared::{
    async_block, empty_state, field, link, maybe_error, page, row, status_badge, submit_button,
    table, text,
};

pub fn render_booking_details(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let screen = state.booking_details.borrow().clone();
    let title = tf("booking_title", &lang, &[("id", screen.booking_id.to_string().as_str())]);

    let body = async_block(&screen.details, &lang, |details| render_details(state, details, &lang))?;

    Ok(page("booking-details-page", &title)?
        .child(link(state, "/bookings/my", &t("back_to_my_bookings", &lang), "link")?)?
        .child(body)?
        .build())
}

fn render_details(state: &AppState, details: &BookingDetails, lang: &str) -> Result<Element, JsValue> {
    let booking = &details.booking;
    let summary = ElementBuilder::new("div")?
        .class("card booking-summary")
        .child(status_badge(&booking.status)?)?
        .child(
            ElementBuilder::new("p")?
                .text(booking.description.as_deref().unwrap_or(&t("no_description", lang)))
                .build(),
        )?
        .build();

    let services = if details.services.is_empty() {
        empty_state(&t("no_booking_services", lang))?
    } else {
        let headers = [t("company_service_id", lang), t("service_title", lang), t("notes", lang)];
        let rows = details
            .services
            .iter()
            .map(render_service_row)
            .collect::<Result<Vec<_>, _>>()?;
        table(&headers, rows)?
    };

    Ok(ElementBuilder::new("div")?
        .child(summary)?
        .child(ElementBuilder::new("h3")?.text(&t("booking_services", lang)).build())?
        .child(services)?
        .child(render_add_form(state, lang)?)?
        .build())
}

fn render_service_row(item: &BookingService) -> Result<Element, JsValue> {
    let title = item
        .company_service
        .as_ref()
        .and_then(|cs| cs.service_title())
        .unwrap_or("");
    row(vec![
        text(&item.company_service_id.to_string())?,
        text(title)?,
        text(item.notes.as_deref().unwrap_or(""))?,
    ])
}

fn render_add_form(state: &AppState, lang: &str) -> Result<Element, JsValue> {
    let screen = state.booking_details.borrow().clone();

    let s = state.clone();
    let id_field = field(
        "booking-company-service",
        &t("company_service_id", lang),
        "number",
        &screen.company_service_id,
        "",
        move |v| s.booking_details.borrow_mut().company_service_id = v,
    )?;
    let s = state.clone();
    let notes_field = field(
        "booking-notes",
        &t("notes", lang),
        "text",
        &screen.notes,
        "",
        move |v| s.booking_details.borrow_mut().notes = v,
    )?;

    let form = ElementBuilder::new("form")?
        .class("inline-form")
        .child_opt(maybe_error(screen.action_error.as_ref(), lang)?)?
        .child(id_field)?
        .child(notes_field)?
        .child(submit_button(&t("add_service", lang), &t("saving", lang), screen.busy)?)?
        .build();
    let s = state.clone();
    on_submit(&form, move || add_service(&s))?;
    Ok(form)
}

fn add_service(state: &AppState) {
    let (booking_id, company_service_id, notes) = {
        let mut screen = state.booking_details.borrow_mut();
        if screen.busy {
            return;
        }
        screen.busy = true;
        screen.action_error = None;
        (screen.booking_id, screen.company_service_id.clone(), screen.notes.clone())
    };
    state.notify();

    let state = state.clone();
    spawn_local(async move {
        let result = state
            .booking_vm()
            .add_service(booking_id, &company_service_id, &notes)
            .await;
        state
            .booking_details
            .borrow_mut()
            .finish_add(booking_id, result);
        state.notify();
    });
}
