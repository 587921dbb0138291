//! Client-side key/value storage
//!
//! Mirrors the `Storage` web API: string keys, string values, and every call
//! may fail (private browsing, quota exceeded, storage disabled).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// A storage call failed at the platform level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("storage failure: {0}")]
pub struct StorageFailure(pub String);

/// String key/value store with interior mutability, like `web_sys::Storage`
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageFailure>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageFailure>;
    fn remove_item(&self, key: &str) -> Result<(), StorageFailure>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageFailure> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageFailure> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageFailure> {
        (**self).remove_item(key)
    }
}

/// In-memory store for native builds and tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    /// When set, every write or removal fails as if the quota were exceeded
    reject_writes: Cell<bool>,
    /// When set, every read fails as if storage access were denied
    reject_reads: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `set_item` and `remove_item` calls fail (or succeed again)
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Make subsequent `get_item` calls fail (or succeed again)
    pub fn set_reject_reads(&self, reject: bool) {
        self.reject_reads.set(reject);
    }

    /// Raw value stored under `key`, bypassing the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Store a raw value, bypassing the write rejection switch
    pub fn put_raw(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageFailure> {
        if self.reject_reads.get() {
            return Err(StorageFailure("access denied".to_string()));
        }
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageFailure> {
        if self.reject_writes.get() {
            return Err(StorageFailure("quota exceeded".to_string()));
        }
        self.put_raw(key, value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageFailure> {
        if self.reject_writes.get() {
            return Err(StorageFailure("storage disabled".to_string()));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Open the window's LocalStorage, if the browser exposes one
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()?;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
fn js_failure(err: wasm_bindgen::JsValue) -> StorageFailure {
    StorageFailure(format!("{:?}", err))
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageFailure> {
        self.storage.get_item(key).map_err(js_failure)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageFailure> {
        self.storage.set_item(key, value).map_err(js_failure)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageFailure> {
        self.storage.remove_item(key).map_err(js_failure)
    }
}
