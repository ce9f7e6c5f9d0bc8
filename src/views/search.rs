// ============================================================================
// SEARCH VIEW - Buscar un servicio y reservar en una compañía
// ============================================================================
// La lista de sugerencias se actualiza en su contenedor (#search-suggestions)
// sin re-render completo, para que el input conserve el foco.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{get_element_by_id, on_event, on_input, on_key, on_submit, replace_content, ElementBuilder};
use crate::models::CompanyOffer;
use crate::state::app_state::AppState;
use crate::utils::i18n::{t, tf};
use crate::viewmodels::SearchNotice;
use crate::views::shared::{button, empty_state, error_banner, link, maybe_error, notice, page, submit_button};

const SUGGESTIONS_ID: &str = "search-suggestions";
const QUERY_ID: &str = "search-query";

pub fn render_search(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let screen = state.search.borrow().clone();

    let input = ElementBuilder::new("input")?
        .id(QUERY_ID)?
        .class("form-control search-input")
        .attr("type", "text")?
        .attr("autocomplete", "off")?
        .attr("value", &screen.query)?
        .attr("placeholder", &t("search_placeholder", &lang))?
        .build();

    let s = state.clone();
    on_input(&input, move |value| {
        s.search.borrow_mut().set_query(&value);
        refresh_suggestions(&s);
    })?;
    let s = state.clone();
    on_event(&input, "focus", move |_| {
        {
            let mut search = s.search.borrow_mut();
            search.show_suggestions = !search.suggestions.is_empty();
        }
        refresh_suggestions(&s);
    })?;
    let s = state.clone();
    on_event(&input, "blur", move |_| {
        s.search.borrow_mut().hide_suggestions();
        refresh_suggestions(&s);
    })?;
    let s = state.clone();
    on_key(&input, move |key, _| {
        if key == "Escape" {
            s.search.borrow_mut().hide_suggestions();
            refresh_suggestions(&s);
        }
    })?;

    let suggestions = ElementBuilder::new("div")?
        .id(SUGGESTIONS_ID)?
        .class("suggestions-container")
        .child(render_suggestions(state)?)?
        .build();

    let field = ElementBuilder::new("div")?
        .class("search-field")
        .child(input)?
        .child(suggestions)?
        .build();

    let form = ElementBuilder::new("form")?
        .class("search-form")
        .child(field)?
        .child(submit_button(&t("search", &lang), &t("searching", &lang), screen.searching)?)?
        .build();
    let s = state.clone();
    on_submit(&form, move || submit_search(&s))?;

    let catalog_error = screen
        .catalog
        .error()
        .map(|message| error_banner(&t(message, &lang)))
        .transpose()?;

    let notice_el = match &screen.notice {
        Some(SearchNotice::NotFound) => Some(empty_state(&t("service_not_found", &lang))?),
        Some(SearchNotice::Booked { booking_id, company }) => {
            let message = tf(
                "booking_created",
                &lang,
                &[("id", booking_id.to_string().as_str()), ("company", company.as_str())],
            );
            let link_el = link(state, &format!("/bookings/{}", booking_id), &t("open_booking", &lang), "link")?;
            let banner = notice(&message)?;
            banner.append_child(&link_el)?;
            Some(banner)
        }
        None => None,
    };

    Ok(page("search-page", &t("search_title", &lang))?
        .child_opt(catalog_error)?
        .child(form)?
        .child_opt(maybe_error(screen.error.as_ref(), &lang)?)?
        .child_opt(notice_el)?
        .child(render_results(state, &lang)?)?
        .build())
}

/// Lista de sugerencias (vacía si está oculta)
fn render_suggestions(state: &AppState) -> Result<Element, JsValue> {
    let search = state.search.borrow().clone();
    let list = ElementBuilder::new("ul")?.class("suggestions").build();
    if !search.show_suggestions {
        return Ok(list);
    }

    for service in &search.suggestions {
        let item = ElementBuilder::new("li")?
            .class("suggestion-item")
            .text(&service.title)
            .build();
        let s = state.clone();
        let title = service.title.clone();
        // mousedown llega antes que el blur del input
        on_event(&item, "mousedown", move |event| {
            event.prevent_default();
            s.search.borrow_mut().select_suggestion(&title);
            s.notify();
        })?;
        list.append_child(&item)?;
    }
    Ok(list)
}

fn refresh_suggestions(state: &AppState) {
    if let Some(container) = get_element_by_id(SUGGESTIONS_ID) {
        match render_suggestions(state) {
            Ok(list) => {
                if let Err(e) = replace_content(&container, &list) {
                    log::error!("❌ [SEARCH] Error actualizando sugerencias: {:?}", e);
                }
            }
            Err(e) => log::error!("❌ [SEARCH] Error renderizando sugerencias: {:?}", e),
        }
    }
}

fn render_results(state: &AppState, lang: &str) -> Result<Element, JsValue> {
    let search = state.search.borrow().clone();
    let container = ElementBuilder::new("div")?.class("search-results").build();
    if search.results.is_empty() {
        return Ok(container);
    }

    let heading = ElementBuilder::new("h3")?
        .text(&tf("companies_offering", lang, &[("service", search.searched.as_str())]))
        .build();
    container.append_child(&heading)?;

    for offer in &search.results {
        let offer_el = render_offer(state, offer, search.booking, lang)?;
        container.append_child(&offer_el)?;
    }
    Ok(container)
}

fn render_offer(
    state: &AppState,
    offer: &CompanyOffer,
    booking: Option<i64>,
    lang: &str,
) -> Result<Element, JsValue> {
    let in_progress = booking == Some(offer.company_service_id);
    let label = if in_progress { t("booking_in_progress", lang) } else { t("book", lang) };

    let s = state.clone();
    let target = offer.clone();
    let book = button(&label, "btn btn-primary", booking.is_some(), move || {
        book_offer(&s, target.clone());
    })?;

    Ok(ElementBuilder::new("div")?
        .class("card offer-card")
        .child(ElementBuilder::new("span")?.class("offer-name").text(&offer.name).build())?
        .child(book)?
        .build())
}

fn submit_search(state: &AppState) {
    let query = {
        let mut search = state.search.borrow_mut();
        if !search.start_search() {
            return;
        }
        search.query.clone()
    };
    state.notify();

    let state = state.clone();
    spawn_local(async move {
        let result = state.search_vm().search(&query).await;
        state.search.borrow_mut().apply_results(&query, result);
        state.notify();
    });
}

fn book_offer(state: &AppState, offer: CompanyOffer) {
    let title = {
        let mut search = state.search.borrow_mut();
        search.booking = Some(offer.company_service_id);
        search.error = None;
        search.notice = None;
        search.searched.clone()
    };
    state.notify();

    let state = state.clone();
    spawn_local(async move {
        let result = state.search_vm().book(&title, &offer).await;
        {
            let mut search = state.search.borrow_mut();
            search.booking = None;
            match result {
                Ok(booking) => {
                    search.notice = Some(SearchNotice::Booked {
                        booking_id: booking.booking_id,
                        company: offer.name.clone(),
                    })
                }
                Err(e) => search.error = Some(e.user_message("booking_failed")),
            }
        }
        state.notify();
    });
}
