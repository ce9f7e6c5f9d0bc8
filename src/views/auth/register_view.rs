// ============================================================================
// REGISTER VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_change, on_submit, ElementBuilder};
use crate::models::Role;
use crate::state::app_state::AppState;
use crate::utils::constants::{ADMIN_ROLE, AFTER_LOGIN_PATH, CUSTOMER_ROLE};
use crate::utils::i18n::t;
use crate::views::shared::{field, link, maybe_error, submit_button};

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let form_state = state.register.borrow().clone();

    let title = ElementBuilder::new("h1")?.text(&t("register_title", &lang)).build();

    let s = state.clone();
    let name = field("register-name", &t("name", &lang), "text", &form_state.name, "", move |v| {
        s.register.borrow_mut().name = v;
    })?;
    let s = state.clone();
    let email = field("register-email", &t("email", &lang), "email", &form_state.email, "", move |v| {
        s.register.borrow_mut().email = v;
    })?;
    let s = state.clone();
    let password = field(
        "register-password",
        &t("password", &lang),
        "password",
        &form_state.password,
        "",
        move |v| s.register.borrow_mut().password = v,
    )?;

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .child(title)?
        .child_opt(maybe_error(form_state.status.as_ref(), &lang)?)?
        .child(name)?
        .child(email)?
        .child(password)?
        .child(render_role_select(state, &form_state.role, &lang)?)?
        .child(submit_button(&t("register_submit", &lang), &t("registering", &lang), form_state.submitting)?)?
        .build();

    let s = state.clone();
    on_submit(&form, move || submit_register(&s))?;

    let login_hint = ElementBuilder::new("p")?
        .class("auth-switch")
        .text(&t("have_account", &lang))
        .child(link(state, "/login", &t("login_link", &lang), "link")?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("auth-screen")
        .child(form)?
        .child(login_hint)?
        .build())
}

fn render_role_select(state: &AppState, role: &Role, lang: &str) -> Result<Element, JsValue> {
    let options = [(CUSTOMER_ROLE, "role_customer"), (ADMIN_ROLE, "role_admin")]
        .iter()
        .map(|(value, key)| {
            ElementBuilder::new("option")?
                .attr("value", value)?
                .flag("selected", role.as_str() == *value)
                .map(|b| b.text(&t(key, lang)).build())
        })
        .collect::<Result<Vec<_>, JsValue>>()?;

    let label = ElementBuilder::new("label")?
        .attr("for", "register-role")?
        .text(&t("role", lang))
        .build();
    let select = ElementBuilder::new("select")?
        .id("register-role")?
        .class("form-control")
        .children(options)?
        .build();
    let s = state.clone();
    on_change(&select, move |value| s.register.borrow_mut().role = Role::parse(&value))?;

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(label)?
        .child(select)?
        .build())
}

fn submit_register(state: &AppState) {
    let form = state.register.borrow().clone();
    if form.submitting {
        return;
    }
    {
        let mut register = state.register.borrow_mut();
        register.submitting = true;
        register.status = None;
    }
    state.notify();

    let state = state.clone();
    spawn_local(async move {
        match state.auth_vm().register(&form).await {
            Ok(_) => state.go(AFTER_LOGIN_PATH),
            Err(e) => {
                {
                    let mut register = state.register.borrow_mut();
                    register.submitting = false;
                    register.status = Some(e.server_or("register_failed"));
                }
                state.notify();
            }
        }
    });
}
