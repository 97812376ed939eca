use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};

use super::error::AttributionError;

/// String key/value storage that lives as long as the browsing session.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AttributionError>;
    fn write(&self, key: &str, value: &str) -> Result<(), AttributionError>;
}

impl SessionStorage for web_sys::Storage {
    fn read(&self, key: &str) -> Result<Option<String>, AttributionError> {
        self.get_item(key)
            .map_err(|e| AttributionError::Storage(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AttributionError> {
        // Throws QuotaExceededError when storage is full or disabled
        self.set_item(key, value)
            .map_err(|e| AttributionError::Storage(format!("{:?}", e)))
    }
}

/// Page-lifetime storage, used when sessionStorage isn't available.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AttributionError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AttributionError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The window's sessionStorage, or an in-memory stand-in when the browser
/// refuses access (sandboxed iframes, some private modes).
pub fn browser_session_storage() -> Rc<dyn SessionStorage> {
    let Some(window) = web_sys::window() else {
        debug!("No window, keeping attribution in memory");
        return Rc::new(MemoryStorage::default());
    };

    match window.session_storage() {
        Ok(Some(storage)) => Rc::new(storage),
        Ok(None) => {
            debug!("sessionStorage unavailable, keeping attribution in memory");
            Rc::new(MemoryStorage::default())
        }
        Err(e) => {
            warn!("sessionStorage access denied: {:?}", e);
            Rc::new(MemoryStorage::default())
        }
    }
}
