// ============================================================================
// HOME VIEW - Portada pública
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::ElementBuilder;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::shared::link;

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let title = ElementBuilder::new("h1")?.text(&CONFIG.app_title).build();
    let tagline = ElementBuilder::new("p")?.class("lead").text(&t("home_tagline", &lang)).build();

    let actions = if state.session.is_authenticated() {
        vec![link(state, "/search", &t("nav_search", &lang), "btn btn-primary")?]
    } else {
        vec![
            link(state, "/login", &t("login_link", &lang), "btn btn-primary")?,
            link(state, "/register", &t("register_link", &lang), "btn btn-secondary")?,
        ]
    };

    Ok(ElementBuilder::new("section")?
        .class("hero")
        .child(title)?
        .child(tagline)?
        .child(ElementBuilder::new("div")?.class("hero-actions").children(actions)?.build())?
        .build())
}
