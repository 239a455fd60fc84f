//! Synchronous string key-value persistence.
//!
//! The season cache and the favorites store only ever talk to a
//! [`KeyValueStore`]. In the browser that is `localStorage`; tests and
//! storage-less browsers get the in-process [`MemoryStore`].

use crate::utils::js_error_message;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Errors raised by a key-value backend.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No storage backend could be obtained.
    Unavailable(String),
    ReadFailed { key: String, message: String },
    /// Typically a quota error from the browser.
    WriteFailed { key: String, message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::ReadFailed { key, message } => {
                write!(f, "Failed to read '{}': {}", key, message)
            }
            StorageError::WriteFailed { key, message } => {
                write!(f, "Failed to write '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// A durable, synchronous, string-keyed and string-valued store.
///
/// Not `Send`: the browser backend wraps a JS object and the whole app runs
/// on the UI thread.
pub trait KeyValueStore {
    /// Returns `Ok(None)` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites any existing value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Succeeds even if the key didn't exist.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Browser `localStorage`.
#[derive(Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Obtain the window's local storage.
    pub fn open() -> Result<Self, StorageError> {
        match gloo_utils::window().local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::Unavailable(
                "localStorage is not available".to_string(),
            )),
            Err(e) => Err(StorageError::Unavailable(js_error_message(&e))),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                message: js_error_message(&e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                message: js_error_message(&e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                message: js_error_message(&e),
            })
    }
}

/// In-process map with the same contract as `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Open `localStorage`, falling back to memory when the browser refuses
/// (private mode, disabled storage).
pub fn browser_store() -> Rc<dyn KeyValueStore> {
    match LocalStore::open() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            log::warn!("{}; favorites and seasons will not persist", e);
            Rc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_and_removes() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn rc_store_shares_entries() {
        let store = Rc::new(MemoryStore::new());
        let handle: Rc<dyn KeyValueStore> = store.clone();
        handle.set("favorites", "{}").unwrap();
        assert!(store.contains_key("favorites"));
    }
}
