// ============================================================================
// WIDGETS - Piezas comunes de las vistas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, on_input, ElementBuilder};
use crate::models::StatusTone;
use crate::state::async_result::AsyncResult;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;

/// Página con título
pub fn page(class: &str, title: &str) -> Result<ElementBuilder, JsValue> {
    let heading = ElementBuilder::new("h2")?.class("page-title").text(title).build();
    ElementBuilder::new("section")?
        .class(&format!("page {}", class))
        .child(heading)
}

/// Render uniforme de una carga: spinner, error o contenido
pub fn async_block<T, F>(result: &AsyncResult<T>, lang: &str, render: F) -> Result<Element, JsValue>
where
    F: FnOnce(&T) -> Result<Element, JsValue>,
{
    match result {
        AsyncResult::Pending => Ok(ElementBuilder::new("div")?
            .class("loading")
            .text(&t("loading", lang))
            .build()),
        AsyncResult::Failure(message) => error_banner(&t(message, lang)),
        AsyncResult::Success(data) => render(data),
    }
}

pub fn error_banner(message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("alert alert-error")
        .attr("role", "alert")?
        .text(message)
        .build())
}

/// Banner de error opcional (clave i18n o texto del servidor)
pub fn maybe_error(message: Option<&String>, lang: &str) -> Result<Option<Element>, JsValue> {
    message.map(|m| error_banner(&t(m, lang))).transpose()
}

pub fn notice(message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("alert alert-success")
        .text(message)
        .build())
}

pub fn empty_state(message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class("empty-state").text(message).build())
}

/// Enlace interno: navega sin recargar
pub fn link(state: &AppState, path: &str, label: &str, class: &str) -> Result<Element, JsValue> {
    let anchor = ElementBuilder::new("a")?
        .class(class)
        .attr("href", path)?
        .text(label)
        .build();
    let state = state.clone();
    let target = path.to_string();
    on_click(&anchor, move |event| {
        event.prevent_default();
        state.go(&target);
    })?;
    Ok(anchor)
}

pub fn button<F>(label: &str, class: &str, disabled: bool, handler: F) -> Result<Element, JsValue>
where
    F: FnMut() + 'static,
{
    let mut handler = handler;
    let btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(class)
        .flag("disabled", disabled)?
        .text(label)
        .build();
    on_click(&btn, move |_| handler())?;
    Ok(btn)
}

pub fn submit_button(label: &str, busy_label: &str, busy: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .flag("disabled", busy)?
        .text(if busy { busy_label } else { label })
        .build())
}

/// Campo de formulario con etiqueta; `on_value` recibe cada cambio
pub fn field<F>(
    id: &str,
    label: &str,
    kind: &str,
    value: &str,
    placeholder: &str,
    on_value: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let label_el = ElementBuilder::new("label")?.attr("for", id)?.text(label).build();
    let input = ElementBuilder::new("input")?
        .id(id)?
        .class("form-control")
        .attr("type", kind)?
        .attr("value", value)?
        .attr("placeholder", placeholder)?
        .build();
    on_input(&input, on_value)?;

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(label_el)?
        .child(input)?
        .build())
}

/// Input suelto (edición en línea)
pub fn inline_input<F>(id: &str, value: &str, on_value: F) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .id(id)?
        .class("form-control form-control-inline")
        .attr("type", "text")?
        .attr("value", value)?
        .build();
    on_input(&input, on_value)?;
    Ok(input)
}

pub fn status_badge(status: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("span")?
        .class(StatusTone::classify(status).css_class())
        .text(status)
        .build())
}

/// Tabla simple: cabeceras + filas ya construidas
pub fn table(headers: &[String], rows: Vec<Element>) -> Result<Element, JsValue> {
    let head_row = ElementBuilder::new("tr")?
        .children(
            headers
                .iter()
                .map(|h| ElementBuilder::new("th").map(|b| b.text(h).build()))
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();
    let thead = ElementBuilder::new("thead")?.child(head_row)?.build();
    let tbody = ElementBuilder::new("tbody")?.children(rows)?.build();

    Ok(ElementBuilder::new("table")?
        .class("table")
        .child(thead)?
        .child(tbody)?
        .build())
}

/// Fila de tabla a partir de celdas
pub fn row(cells: Vec<Element>) -> Result<Element, JsValue> {
    let tds = cells
        .into_iter()
        .map(|cell| ElementBuilder::new("td").and_then(|b| b.child(cell)).map(|b| b.build()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ElementBuilder::new("tr")?.children(tds)?.build())
}

/// Celda de texto
pub fn text(value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("span")?.text(value).build())
}
