// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{document, get_element_by_id, replace_content};
use crate::state::app_state::AppState;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación sobre el elemento #app
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        if let Some(doc) = document() {
            doc.set_title(&CONFIG.app_title);
        }

        let state = AppState::browser();

        // Varios notify seguidos producen un solo re-render
        let scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if scheduled.replace(true) {
                return;
            }
            let scheduled = scheduled.clone();
            Timeout::new(0, move || {
                scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        log::info!(
            "✅ [APP] Estado inicializado (sesión: {}, backend: {})",
            state.session.is_authenticated(),
            CONFIG.backend_url
        );
        Ok(Self { state, root })
    }

    /// Re-evaluar la ruta (guarda incluida) y pintar
    pub fn render(&self) -> Result<(), JsValue> {
        let route = self.state.sync_with_location();
        let view = render_app(&self.state, &route)?;
        replace_content(&self.root, &view)
    }
}
