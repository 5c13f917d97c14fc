//! Durable key-value storage behind the session store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::window;

/// String key-value storage that survives a page reload.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl BrowserStorage {
    pub fn is_available() -> bool {
        get_local_storage().is_some()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("localStorage is not available")?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("Failed to write {}: {:?}", key, e))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Process-local map. Used when `localStorage` is blocked, and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `localStorage` when the browser allows it, otherwise a [`MemoryStore`]
/// (the session then ends with the tab).
pub fn browser_store() -> Rc<dyn KeyValueStore> {
    if BrowserStorage::is_available() {
        Rc::new(BrowserStorage)
    } else {
        log::warn!("localStorage unavailable, session will not survive a reload");
        Rc::new(MemoryStore::new())
    }
}
