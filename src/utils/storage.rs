// ============================================================================
// STORAGE - Almacenamiento durable (localStorage) detrás de un trait
// ============================================================================
// El navegador usa LocalStorageBackend; los tests y el arranque nativo usan
// MemoryStorage. Un clon de MemoryStorage comparte el mismo mapa, así que
// construir un store nuevo sobre un clon equivale a recargar la página.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

/// Backend clave/valor de strings
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

/// localStorage del navegador (vía gloo-storage)
#[derive(Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|_| "Error leyendo localStorage".to_string())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|_| "Error eliminando de localStorage".to_string())
    }
}

/// Almacenamiento en memoria compartido entre clones
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Guardar una preferencia serializada en JSON
pub fn save_preference<T: Serialize>(
    backend: &dyn StorageBackend,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando preferencia: {}", e))?;
    backend.set_item(key, &json)
}

/// Cargar una preferencia; None si falta o no se puede leer
pub fn load_preference<T: DeserializeOwned>(backend: &dyn StorageBackend, key: &str) -> Option<T> {
    let json = backend.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_items() {
        let storage = MemoryStorage::new();
        let reloaded = storage.clone();

        storage.set_item("k", "v").unwrap();
        assert_eq!(reloaded.get_item("k").unwrap(), Some("v".to_string()));

        reloaded.remove_item("k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn preferences_round_trip_and_ignore_garbage() {
        let storage = MemoryStorage::new();
        save_preference(&storage, "language", &"EN".to_string()).unwrap();
        assert_eq!(load_preference::<String>(&storage, "language"), Some("EN".to_string()));

        storage.set_item("broken", "{not json").unwrap();
        assert_eq!(load_preference::<String>(&storage, "broken"), None);
        assert_eq!(load_preference::<String>(&storage, "missing"), None);
    }
}
