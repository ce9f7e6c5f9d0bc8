// ============================================================================
// NEW BOOKING VIEW - Alta manual de una reserva
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_submit, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::i18n::{t, tf};
use crate::views::shared::{field, link, maybe_error, notice, page, submit_button};

pub fn render_new_booking(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let form_state = state.new_booking.borrow().clone();

    let s = state.clone();
    let user_id = field(
        "booking-user-id",
        &t("user_id_optional", &lang),
        "number",
        &form_state.user_id,
        "",
        move |v| s.new_booking.borrow_mut().user_id = v,
    )?;
    let s = state.clone();
    let description = field(
        "booking-description",
        &t("description", &lang),
        "text",
        &form_state.description,
        "",
        move |v| s.new_booking.borrow_mut().description = v,
    )?;
    let s = state.clone();
    let status = field(
        "booking-status",
        &t("status", &lang),
        "text",
        &form_state.status,
        "",
        move |v| s.new_booking.borrow_mut().status = v,
    )?;

    let created = match form_state.created {
        Some(id) => {
            let banner = notice(&tf("booking_saved", &lang, &[("id", id.to_string().as_str())]))?;
            let open_link = link(state, &format!("/bookings/{}", id), &t("open_booking", &lang), "link")?;
            banner.append_child(&open_link)?;
            Some(banner)
        }
        None => None,
    };

    let form = ElementBuilder::new("form")?
        .class("booking-form")
        .child_opt(maybe_error(form_state.error.as_ref(), &lang)?)?
        .child_opt(created)?
        .child(user_id)?
        .child(description)?
        .child(status)?
        .child(submit_button(&t("create", &lang), &t("saving", &lang), form_state.busy)?)?
        .build();
    let s = state.clone();
    on_submit(&form, move || submit(&s))?;

    Ok(page("new-booking-page", &t("new_booking", &lang))?.child(form)?.build())
}

fn submit(state: &AppState) {
    let form = {
        let mut form = state.new_booking.borrow_mut();
        if form.busy {
            return;
        }
        form.busy = true;
        form.error = None;
        form.created = None;
        form.clone()
    };
    state.notify();

    let state = state.clone();
    spawn_local(async move {
        let result = state.booking_vm().create(&form).await;
        {
            let mut form = state.new_booking.borrow_mut();
            form.busy = false;
            match result {
                Ok(booking) => {
                    form.created = Some(booking.booking_id);
                    form.description.clear();
                }
                Err(e) => form.error = Some(e.user_message("booking_failed")),
            }
        }
        state.notify();
    });
}
