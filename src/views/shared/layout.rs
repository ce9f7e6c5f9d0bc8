// ============================================================================
// LAYOUT - Cabecera, barra de navegación y pie
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{on_change, ElementBuilder};
use crate::router::Route;
use crate::state::app_state::AppState;
use crate::utils::i18n::{t, LANGUAGES};
use crate::views::shared::{button, link};

/// Cabecera con logo; no aparece en las pantallas de login/registro
pub fn render_header(state: &AppState, route: &Route) -> Result<Option<Element>, JsValue> {
    if route.is_auth_screen() {
        return Ok(None);
    }
    let logo = ElementBuilder::new("span")?.class("logo-badge").text("OG").build();
    let title = ElementBuilder::new("span")?
        .class("logo-title")
        .text(&CONFIG.app_title)
        .build();
    let brand = link(state, "/", "", "brand")?;
    brand.append_child(&logo)?;
    brand.append_child(&title)?;

    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(brand)?
        .child(render_language_select(state)?)?
        .build();
    Ok(Some(header))
}

fn render_language_select(state: &AppState) -> Result<Element, JsValue> {
    let current = state.lang();
    let options = LANGUAGES
        .iter()
        .map(|code| {
            ElementBuilder::new("option")?
                .attr("value", code)?
                .flag("selected", *code == current)
                .map(|b| b.text(code).build())
        })
        .collect::<Result<Vec<_>, JsValue>>()?;

    let select = ElementBuilder::new("select")?
        .class("language-select")
        .attr("aria-label", &t("language", &current))?
        .children(options)?
        .build();
    let state = state.clone();
    on_change(&select, move |lang| state.set_language(&lang))?;
    Ok(select)
}

/// Navegación: solo con sesión; el enlace de administración solo para admin
pub fn render_navbar(state: &AppState, route: &Route) -> Result<Option<Element>, JsValue> {
    let snapshot = state.session.get();
    if !snapshot.is_authenticated() {
        return Ok(None);
    }
    let lang = state.lang();

    let mut items: Vec<(&str, &str)> = vec![
        ("/companies", "nav_companies"),
        ("/my-services", "nav_my_services"),
        ("/bookings/my", "nav_my_bookings"),
        ("/search", "nav_search"),
    ];
    if snapshot.is_admin() {
        items.push(("/admin", "nav_admin"));
    }
    items.push(("/profile", "nav_profile"));

    let current = route.path();
    let links = items
        .into_iter()
        .map(|(path, key)| {
            let class = if current == path { "nav-link active" } else { "nav-link" };
            link(state, path, &t(key, &lang), class)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let state_logout = state.clone();
    let logout = button(&t("nav_logout", &lang), "btn btn-link nav-logout", false, move || {
        state_logout.logout();
    })?;

    Ok(Some(
        ElementBuilder::new("nav")?
            .class("app-navbar")
            .children(links)?
            .child(logout)?
            .build(),
    ))
}

/// Pie de página; oculto en la portada
pub fn render_footer(state: &AppState, route: &Route) -> Result<Option<Element>, JsValue> {
    if *route == Route::Home {
        return Ok(None);
    }
    Ok(Some(
        ElementBuilder::new("footer")?
            .class("app-footer")
            .text(&t("footer", &state.lang()))
            .build(),
    ))
}
