// ============================================================================
// COMPANIES VIEW - Compañías del usuario (alta, renombrado, baja)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{confirm, on_submit, ElementBuilder};
use crate::models::Company;
use crate::state::app_state::AppState;
use crate::state::async_result::AsyncResult;
use crate::utils::i18n::t;
use crate::viewmodels::ActionError;
use crate::views::shared::{
    async_block, button, empty_state, field, inline_input, maybe_error, page, row, submit_button,
    table, text,
};

pub fn render_companies(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let screen = state.companies.borrow().clone();

    let s = state.clone();
    let create_form = ElementBuilder::new("form")?
        .class("inline-form")
        .child(field(
            "company-name",
            &t("company_name", &lang),
            "text",
            &screen.new_name,
            &t("company_name_placeholder", &lang),
            move |v| s.companies.borrow_mut().new_name = v,
        )?)?
        .child(submit_button(&t("create", &lang), &t("saving", &lang), screen.busy)?)?
        .build();
    let s = state.clone();
    on_submit(&create_form, move || {
        let name = s.companies.borrow().new_name.clone();
        let vm = s.company_vm();
        run(&s, async move { vm.create(&name).await }, true);
    })?;

    let list = async_block(&screen.companies, &lang, |companies| {
        if companies.is_empty() {
            return empty_state(&t("no_companies", &lang));
        }
        let headers = [t("id", &lang), t("company_name", &lang), t("actions", &lang)];
        let rows = companies
            .iter()
            .map(|company| render_row(state, company, &lang))
            .collect::<Result<Vec<_>, _>>()?;
        table(&headers, rows)
    })?;

    Ok(page("companies-page", &t("companies_title", &lang))?
        .child_opt(maybe_error(screen.action_error.as_ref(), &lang)?)?
        .child(create_form)?
        .child(list)?
        .build())
}

fn render_row(state: &AppState, company: &Company, lang: &str) -> Result<Element, JsValue> {
    let screen = state.companies.borrow();
    let id = company.company_id;

    if let Some((_, draft)) = screen.editing.as_ref().filter(|_| screen.is_editing(id)) {
        let s = state.clone();
        let input = inline_input(&format!("company-edit-{}", id), draft, move |v| {
            if let Some((_, draft)) = s.companies.borrow_mut().editing.as_mut() {
                *draft = v;
            }
        })?;
        let s = state.clone();
        let save = button(&t("save", lang), "btn btn-primary btn-sm", screen.busy, move || {
            let draft = s.companies.borrow().editing.clone();
            if let Some((id, name)) = draft {
                let vm = s.company_vm();
                run(&s, async move { vm.rename(id, &name).await }, false);
            }
        })?;
        let s = state.clone();
        let cancel = button(&t("cancel", lang), "btn btn-secondary btn-sm", false, move || {
            s.companies.borrow_mut().cancel_edit();
            s.notify();
        })?;
        let actions = ElementBuilder::new("div")?.class("row-actions").child(save)?.child(cancel)?.build();
        return row(vec![text(&id.to_string())?, input, actions]);
    }

    let s = state.clone();
    let target = company.clone();
    let edit = button(&t("edit", lang), "btn btn-secondary btn-sm", screen.busy, move || {
        s.companies.borrow_mut().start_edit(&target);
        s.notify();
    })?;
    let s = state.clone();
    let question = t("confirm_delete_company", lang);
    let delete = button(&t("delete", lang), "btn btn-danger btn-sm", screen.busy, move || {
        if confirm(&question) {
            let vm = s.company_vm();
            run(&s, async move { vm.delete(id).await }, false);
        }
    })?;
    let actions = ElementBuilder::new("div")?.class("row-actions").child(edit)?.child(delete)?.build();
    row(vec![text(&id.to_string())?, text(&company.name)?, actions])
}

/// Ejecutar una acción que devuelve la lista actualizada
fn run<F>(state: &AppState, action: F, clear_form: bool)
where
    F: std::future::Future<Output = Result<Vec<Company>, ActionError>> + 'static,
{
    {
        let mut screen = state.companies.borrow_mut();
        screen.busy = true;
        screen.action_error = None;
    }
    state.notify();

    let state = state.clone();
    spawn_local(async move {
        let result = action.await;
        {
            let mut screen = state.companies.borrow_mut();
            screen.busy = false;
            match result {
                Ok(companies) => {
                    screen.companies = AsyncResult::Success(companies);
                    screen.editing = None;
                    if clear_form {
                        screen.new_name.clear();
                    }
                }
                Err(e) => screen.action_error = Some(e.user_message("company_action_failed")),
            }
        }
        state.notify();
    });
}
