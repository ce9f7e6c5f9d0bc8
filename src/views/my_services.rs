// ============================================================================
// MY SERVICES VIEW - Servicios ofrecidos por las compañías del usuario
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{confirm, on_change, on_submit, ElementBuilder};
use crate::models::CompanyService;
use crate::state::app_state::AppState;
use crate::state::async_result::AsyncResult;
use crate::utils::i18n::t;
use crate::viewmodels::{ActionError, MyServicesData};
use crate::views::shared::{
    async_block, button, empty_state, field, inline_input, link, maybe_error, page, row,
    submit_button, table, text,
};

pub fn render_my_services(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let screen = state.my_services.borrow().clone();

    let body = async_block(&screen.data, &lang, |data| {
        if data.companies.is_empty() {
            return Ok(ElementBuilder::new("div")?
                .class("empty-state")
                .text(&t("need_company_first", &lang))
                .child(link(state, "/companies", &t("nav_companies", &lang), "link")?)?
                .build());
        }
        let form = render_add_form(state, data, &lang)?;
        let list = if data.bindings.is_empty() {
            empty_state(&t("no_company_services", &lang))?
        } else {
            let headers = [t("company", &lang), t("service_title", &lang), t("actions", &lang)];
            let rows = data
                .rows()
                .into_iter()
                .map(|binding| render_row(state, data, binding, &lang))
                .collect::<Result<Vec<_>, _>>()?;
            table(&headers, rows)?
        };
        Ok(ElementBuilder::new("div")?.child(form)?.child(list)?.build())
    })?;

    Ok(page("my-services-page", &t("my_services_title", &lang))?
        .child_opt(maybe_error(screen.action_error.as_ref(), &lang)?)?
        .child(body)?
        .build())
}

fn render_add_form(state: &AppState, data: &MyServicesData, lang: &str) -> Result<Element, JsValue> {
    let screen = state.my_services.borrow().clone();
    let target = screen.target_company();

    let options = data
        .companies
        .iter()
        .map(|company| {
            ElementBuilder::new("option")?
                .attr("value", &company.company_id.to_string())?
                .flag("selected", Some(company.company_id) == target)
                .map(|b| b.text(&company.name).build())
        })
        .collect::<Result<Vec<_>, JsValue>>()?;
    let select = ElementBuilder::new("select")?
        .id("my-services-company")?
        .class("form-control")
        .children(options)?
        .build();
    let s = state.clone();
    on_change(&select, move |value| {
        s.my_services.borrow_mut().selected_company = value.parse().ok();
    })?;
    let company_group = ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", "my-services-company")?.text(&t("company", lang)).build())?
        .child(select)?
        .build();

    let s = state.clone();
    let title = field(
        "my-service-title",
        &t("service_title", lang),
        "text",
        &screen.new_title,
        &t("service_title_placeholder", lang),
        move |v| s.my_services.borrow_mut().new_title = v,
    )?;

    let form = ElementBuilder::new("form")?
        .class("inline-form")
        .child(company_group)?
        .child(title)?
        .child(submit_button(&t("add_service", lang), &t("saving", lang), screen.busy)?)?
        .build();
    let s = state.clone();
    on_submit(&form, move || {
        let (company, title) = {
            let screen = s.my_services.borrow();
            (screen.target_company(), screen.new_title.clone())
        };
        let vm = s.catalog_vm();
        run(&s, async move { vm.add_to_company(company, &title).await }, true);
    })?;
    Ok(form)
}

fn render_row(
    state: &AppState,
    data: &MyServicesData,
    binding: &CompanyService,
    lang: &str,
) -> Result<Element, JsValue> {
    let screen = state.my_services.borrow().clone();
    let company = text(&data.company_name(binding))?;
    let service_id = binding.service_id;

    if let Some((_, draft)) = screen.editing.as_ref().filter(|(id, _)| *id == service_id) {
        let s = state.clone();
        let input = inline_input(&format!("service-edit-{}", binding.company_service_id), draft, move |v| {
            if let Some((_, draft)) = s.my_services.borrow_mut().editing.as_mut() {
                *draft = v;
            }
        })?;
        let s = state.clone();
        let save = button(&t("save", lang), "btn btn-primary btn-sm", screen.busy, move || {
            let draft = s.my_services.borrow().editing.clone();
            if let Some((id, title)) = draft {
                let vm = s.catalog_vm();
                run(&s, async move { vm.rename_service(id, &title).await }, false);
            }
        })?;
        let s = state.clone();
        let cancel = button(&t("cancel", lang), "btn btn-secondary btn-sm", false, move || {
            s.my_services.borrow_mut().editing = None;
            s.notify();
        })?;
        let actions = ElementBuilder::new("div")?.class("row-actions").child(save)?.child(cancel)?.build();
        return row(vec![company, input, actions]);
    }

    let s = state.clone();
    let current_title = data.service_title(binding);
    let edit = button(&t("edit", lang), "btn btn-secondary btn-sm", screen.busy, move || {
        s.my_services.borrow_mut().editing = Some((service_id, current_title.clone()));
        s.notify();
    })?;
    let s = state.clone();
    let binding_id = binding.company_service_id;
    let question = t("confirm_unbind_service", lang);
    let remove = button(&t("remove", lang), "btn btn-danger btn-sm", screen.busy, move || {
        if confirm(&question) {
            let vm = s.catalog_vm();
            run(&s, async move { vm.unbind(binding_id).await }, false);
        }
    })?;
    let actions = ElementBuilder::new("div")?.class("row-actions").child(edit)?.child(remove)?.build();
    row(vec![company, text(&data.service_title(binding))?, actions])
}

fn run<F>(state: &AppState, action: F, clear_form: bool)
where
    F: std::future::Future<Output = Result<MyServicesData, ActionError>> + 'static,
{
    {
        let mut screen = state.my_services.borrow_mut();
        screen.busy = true;
        screen.action_error = None;
    }
    state.notify();

    let state = state.clone();
    spawn_local(async move {
        let result = action.await;
        {
            let mut screen = state.my_services.borrow_mut();
            screen.busy = false;
            match result {
                Ok(data) => {
                    screen.data = AsyncResult::Success(data);
                    screen.editing = None;
                    if clear_form {
                        screen.new_title.clear();
                    }
                }
                Err(e) => screen.action_error = Some(e.user_message("service_action_failed")),
            }
        }
        state.notify();
    });
}
