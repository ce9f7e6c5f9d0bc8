// ============================================================================
// ADMIN DASHBOARD - Entrada al panel de administración
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::shared::{link, page};

pub fn render_admin_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let cards = [
        ("/admin/users", "admin_users_title", "admin_users_hint"),
        ("/admin/analytics", "analytics_title", "analytics_hint"),
        ("/bookings", "bookings_title", "admin_bookings_hint"),
        ("/services", "services_title", "admin_services_hint"),
    ]
    .iter()
    .map(|(path, title, hint)| {
        Ok(ElementBuilder::new("div")?
            .class("card admin-card")
            .child(link(state, path, &t(title, &lang), "admin-card-link")?)?
            .child(ElementBuilder::new("p")?.text(&t(hint, &lang)).build())?
            .build())
    })
    .collect::<Result<Vec<_>, JsValue>>()?;

    Ok(page("admin-page", &t("admin_title", &lang))?
        .child(ElementBuilder::new("div")?.class("admin-grid").children(cards)?.build())?
        .build())
}
