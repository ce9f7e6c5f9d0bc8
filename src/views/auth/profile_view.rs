// ============================================================================
// PROFILE VIEW - Datos del usuario autenticado
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::Me;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::shared::{async_block, button, page};

pub fn render_profile(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let screen = state.profile.borrow().clone();

    let body = async_block(&screen.me, &lang, |me| render_card(state, me, &lang))?;
    Ok(page("profile-page", &t("profile_title", &lang))?.child(body)?.build())
}

fn render_card(state: &AppState, me: &Me, lang: &str) -> Result<Element, JsValue> {
    let avatar = ElementBuilder::new("div")?.class("avatar").text(&me.initials()).build();
    let name = ElementBuilder::new("h3")?.text(&me.name).build();

    let mut details = vec![
        (t("user_id", lang), me.id.to_string()),
        (t("role", lang), me.role.to_string()),
    ];
    if let Some(email) = &me.email {
        details.insert(0, (t("email", lang), email.clone()));
    }
    let list = ElementBuilder::new("dl")?
        .class("profile-details")
        .children(
            details
                .into_iter()
                .flat_map(|(label, value)| {
                    [
                        ElementBuilder::new("dt").map(|b| b.text(&label).build()),
                        ElementBuilder::new("dd").map(|b| b.text(&value).build()),
                    ]
                })
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();

    let s = state.clone();
    let logout = button(&t("nav_logout", lang), "btn btn-danger", false, move || s.logout())?;

    Ok(ElementBuilder::new("div")?
        .class("card profile-card")
        .child(avatar)?
        .child(name)?
        .child(list)?
        .child(logout)?
        .build())
}
