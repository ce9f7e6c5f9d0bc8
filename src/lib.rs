// ============================================================================
// OILGAS BOOKING - FRONTEND MVVM (RUST + WASM)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: lógica de cada pantalla
// - Services: SOLO comunicación API (autenticada)
// - State: sesión, estado de pantallas, notificaciones
// - Router: rutas, guardas y navegación
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
mod dom;
mod views;
mod app;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::dom::{on_event, window};

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 {} ({})", CONFIG.app_title, CONFIG.environment);

    let app = App::new()?;
    app.render()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    // Atrás/adelante del navegador: se registra una sola vez
    if let Some(win) = window() {
        on_event(&win, "popstate", |_| {
            log::debug!("🔙 [MAIN] popstate");
            rerender_app();
        })?;
    }

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|cell| match cell.try_borrow() {
        Ok(app) => match app.as_ref() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        },
        Err(_) => log::warn!("⚠️ [RERENDER] Render en curso, se omite"),
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
