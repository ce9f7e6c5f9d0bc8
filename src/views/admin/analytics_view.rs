// ============================================================================
// ANALYTICS VIEW - Usuarios con reservas activas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::app_state::AppState;
use crate::utils::i18n::{t, tf};
use crate::views::shared::{async_block, empty_state, link, page, row, table, text};

pub fn render_analytics(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let screen = state.analytics.borrow().clone();

    let body = async_block(&screen.users, &lang, |users| {
        if users.is_empty() {
            return empty_state(&t("no_active_users", &lang));
        }
        let summary = ElementBuilder::new("p")?
            .class("counter")
            .text(&tf(
                "analytics_summary",
                &lang,
                &[
                    ("users", users.len().to_string().as_str()),
                    ("bookings", screen.total_active().to_string().as_str()),
                ],
            ))
            .build();

        let headers = [t("id", &lang), t("name", &lang), t("email", &lang), t("active_bookings", &lang)];
        let rows = users
            .iter()
            .map(|user| {
                row(vec![
                    text(&user.user_id.to_string())?,
                    link(state, &format!("/admin/users/{}/bookings", user.user_id), &user.name, "link")?,
                    text(user.email.as_deref().unwrap_or(""))?,
                    text(&user.active_bookings.to_string())?,
                ])
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ElementBuilder::new("div")?
            .child(summary)?
            .child(table(&headers, rows)?)?
            .build())
    })?;

    Ok(page("analytics-page", &t("analytics_title", &lang))?
        .child(link(state, "/admin", &t("back_to_admin", &lang), "link")?)?
        .child(body)?
        .build())
}
