// ============================================================================
// ADMIN USERS VIEW - Listado y baja de usuarios
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{confirm, ElementBuilder};
use crate::models::User;
use crate::state::app_state::AppState;
use crate::state::async_result::AsyncResult;
use crate::utils::i18n::t;
use crate::views::shared::{async_block, button, empty_state, link, maybe_error, page, row, table, text};

pub fn render_admin_users(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let screen = state.admin_users.borrow().clone();

    let body = async_block(&screen.users, &lang, |users| {
        if users.is_empty() {
            return empty_state(&t("no_users", &lang));
        }
        let headers = [
            t("id", &lang),
            t("name", &lang),
            t("email", &lang),
            t("role", &lang),
            t("actions", &lang),
        ];
        let rows = users
            .iter()
            .map(|user| render_row(state, user, &lang))
            .collect::<Result<Vec<_>, _>>()?;
        table(&headers, rows)
    })?;

    Ok(page("admin-users-page", &t("admin_users_title", &lang))?
        .child(link(state, "/admin", &t("back_to_admin", &lang), "link")?)?
        .child_opt(maybe_error(screen.action_error.as_ref(), &lang)?)?
        .child(body)?
        .build())
}

fn render_row(state: &AppState, user: &User, lang: &str) -> Result<Element, JsValue> {
    let id = user.user_id;
    let bookings = link(
        state,
        &format!("/admin/users/{}/bookings", id),
        &t("bookings_title", lang),
        "btn btn-secondary btn-sm",
    )?;
    let s = state.clone();
    let question = t("confirm_delete_user", lang);
    let delete = button(&t("delete", lang), "btn btn-danger btn-sm", false, move || {
        if confirm(&question) {
            delete_user(&s, id);
        }
    })?;
    let actions = ElementBuilder::new("div")?
        .class("row-actions")
        .child(bookings)?
        .child(delete)?
        .build();

    row(vec![
        text(&id.to_string())?,
        text(&user.name)?,
        text(user.email.as_deref().unwrap_or(""))?,
        text(user.role.as_str())?,
        actions,
    ])
}

fn delete_user(state: &AppState, user_id: i64) {
    state.admin_users.borrow_mut().action_error = None;
    let state = state.clone();
    spawn_local(async move {
        let result = state.admin_vm().delete_user(user_id).await;
        {
            let mut screen = state.admin_users.borrow_mut();
            match result {
                Ok(users) => screen.users = AsyncResult::Success(users),
                Err(e) => screen.action_error = Some(e.user_message("user_delete_failed")),
            }
        }
        state.notify();
    });
}
