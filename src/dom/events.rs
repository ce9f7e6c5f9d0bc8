// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los listeners de elementos se olvidan (closure.forget()): el navegador los
// libera al destruir el elemento en el siguiente render. Los globales
// (window) se registran una sola vez en el arranque.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, MouseEvent};

use crate::dom::control_value;

/// Listener genérico sobre cualquier EventTarget
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Input handler: recibe el valor actual del control
pub fn on_input<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let control = element.clone();
    on_event(element, "input", move |_| {
        handler(control_value(&control).unwrap_or_default());
    })
}

/// Change handler (selects): recibe el valor elegido
pub fn on_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let control = element.clone();
    on_event(element, "change", move |_| {
        handler(control_value(&control).unwrap_or_default());
    })
}

/// Submit handler: evita la recarga de la página
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    on_event(form, "submit", move |event| {
        event.prevent_default();
        handler();
    })
}

/// Keydown handler: recibe la tecla pulsada
pub fn on_key<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String, &KeyboardEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        handler(event.key(), &event);
    }) as Box<dyn FnMut(KeyboardEvent)>);
    element.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
