// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_submit, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::constants::AFTER_LOGIN_PATH;
use crate::utils::i18n::t;
use crate::views::shared::{field, link, maybe_error, submit_button};

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let form_state = state.login.borrow().clone();

    let title = ElementBuilder::new("h1")?.text(&t("login_title", &lang)).build();

    let state_email = state.clone();
    let email = field("login-email", &t("email", &lang), "email", &form_state.email, "", move |v| {
        state_email.login.borrow_mut().email = v;
    })?;
    let state_password = state.clone();
    let password = field(
        "login-password",
        &t("password", &lang),
        "password",
        &form_state.password,
        "",
        move |v| state_password.login.borrow_mut().password = v,
    )?;

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .child(title)?
        .child_opt(maybe_error(form_state.status.as_ref(), &lang)?)?
        .child(email)?
        .child(password)?
        .child(submit_button(&t("login_submit", &lang), &t("signing_in", &lang), form_state.submitting)?)?
        .build();

    let state_submit = state.clone();
    on_submit(&form, move || submit_login(&state_submit))?;

    let register_hint = ElementBuilder::new("p")?
        .class("auth-switch")
        .text(&t("no_account", &lang))
        .child(link(state, "/register", &t("register_link", &lang), "link")?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("auth-screen")
        .child(form)?
        .child(register_hint)?
        .build())
}

fn submit_login(state: &AppState) {
    let form = state.login.borrow().clone();
    if form.submitting {
        return;
    }
    {
        let mut login = state.login.borrow_mut();
        login.submitting = true;
        login.status = None;
    }
    state.notify();

    let state = state.clone();
    spawn_local(async move {
        match state.auth_vm().login(&form.email, &form.password).await {
            Ok(_) => state.go(AFTER_LOGIN_PATH),
            Err(e) => {
                {
                    let mut login = state.login.borrow_mut();
                    login.submitting = false;
                    login.status = Some(e.user_message("login_failed"));
                }
                state.notify();
            }
        }
    });
}
