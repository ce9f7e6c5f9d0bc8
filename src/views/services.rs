// ============================================================================
// SERVICES VIEW - Catálogo general de servicios
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_submit, ElementBuilder};
use crate::state::app_state::AppState;
use crate::state::async_result::AsyncResult;
use crate::utils::i18n::t;
use crate::views::shared::{async_block, empty_state, field, maybe_error, page, row, submit_button, table, text};

pub fn render_services(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let screen = state.services.borrow().clone();

    let s = state.clone();
    let form = ElementBuilder::new("form")?
        .class("inline-form")
        .child(field(
            "service-title",
            &t("service_title", &lang),
            "text",
            &screen.new_title,
            &t("service_title_placeholder", &lang),
            move |v| s.services.borrow_mut().new_title = v,
        )?)?
        .child(submit_button(&t("create", &lang), &t("saving", &lang), screen.busy)?)?
        .build();
    let s = state.clone();
    on_submit(&form, move || create_service(&s))?;

    let list = async_block(&screen.services, &lang, |services| {
        if services.is_empty() {
            return empty_state(&t("no_services", &lang));
        }
        let headers = [t("id", &lang), t("service_title", &lang), t("price", &lang)];
        let rows = services
            .iter()
            .map(|service| {
                let price = service.price.map(|p| format!("{:.2}", p)).unwrap_or_else(|| "-".to_string());
                row(vec![text(&service.service_id.to_string())?, text(&service.title)?, text(&price)?])
            })
            .collect::<Result<Vec<_>, _>>()?;
        table(&headers, rows)
    })?;

    Ok(page("services-page", &t("services_title", &lang))?
        .child_opt(maybe_error(screen.action_error.as_ref(), &lang)?)?
        .child(form)?
        .child(list)?
        .build())
}

fn create_service(state: &AppState) {
    let title = {
        let mut screen = state.services.borrow_mut();
        if screen.busy {
            return;
        }
        screen.busy = true;
        screen.action_error = None;
        screen.new_title.clone()
    };
    state.notify();

    let state = state.clone();
    spawn_local(async move {
        let result = state.catalog_vm().create_service(&title).await;
        {
            let mut screen = state.services.borrow_mut();
            screen.busy = false;
            match result {
                Ok(services) => {
                    screen.services = AsyncResult::Success(services);
                    screen.new_title.clear();
                }
                Err(e) => screen.action_error = Some(e.user_message("service_action_failed")),
            }
        }
        state.notify();
    });
}
