// ============================================================================
// NAVIGATOR - Pila de navegación (History API o memoria)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;

pub trait Navigator {
    /// Pathname actual
    fn current_path(&self) -> String;
    /// Nueva entrada en el historial
    fn push(&self, path: &str);
    /// Reemplazar la entrada actual (el "atrás" no vuelve a ella)
    fn replace(&self, path: &str);
    /// Navegación completa (recarga de página)
    fn force_navigate(&self, path: &str);
}

/// Navegador real: window.history + window.location
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&self, path: &str) {
        let pushed = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
        if !matches!(pushed, Some(Ok(()))) {
            log::warn!("⚠️ [ROUTER] No se pudo hacer pushState a {}", path);
        }
    }

    fn replace(&self, path: &str) {
        let replaced = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(path)));
        if !matches!(replaced, Some(Ok(()))) {
            log::warn!("⚠️ [ROUTER] No se pudo hacer replaceState a {}", path);
        }
    }

    fn force_navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::error!("❌ [ROUTER] No se pudo navegar a {}", path);
            }
        }
    }
}

/// Navegador en memoria (tests y arranque sin DOM)
#[derive(Clone)]
pub struct MemoryNavigator {
    entries: Rc<RefCell<Vec<String>>>,
    full_loads: Rc<RefCell<Vec<String>>>,
}

impl MemoryNavigator {
    pub fn new(initial_path: &str) -> Self {
        Self {
            entries: Rc::new(RefCell::new(vec![initial_path.to_string()])),
            full_loads: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Entradas del historial, la última es la actual
    pub fn history(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    /// Navegaciones completas hechas con force_navigate
    pub fn full_loads(&self) -> Vec<String> {
        self.full_loads.borrow().clone()
    }

    /// Simula el botón "atrás"
    pub fn back(&self) -> Option<String> {
        let mut entries = self.entries.borrow_mut();
        if entries.len() > 1 {
            entries.pop();
        }
        entries.last().cloned()
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.entries.borrow().last().cloned().unwrap_or_else(|| "/".to_string())
    }

    fn push(&self, path: &str) {
        self.entries.borrow_mut().push(path.to_string());
    }

    fn replace(&self, path: &str) {
        let mut entries = self.entries.borrow_mut();
        entries.pop();
        entries.push(path.to_string());
    }

    fn force_navigate(&self, path: &str) {
        self.full_loads.borrow_mut().push(path.to_string());
        let mut entries = self.entries.borrow_mut();
        entries.push(path.to_string());
    }
}
