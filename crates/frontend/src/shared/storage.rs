//! Адаптер `web_sys::Storage` к порту хранилища.
//!
//! Если localStorage/sessionStorage недоступны (приватный режим, политика
//! браузера), страница продолжает работать на хранилище в памяти.

use contracts::shared::{MemoryStorage, StorageError, StoragePort};
use std::rc::Rc;
use web_sys::window;

/// Хранилище, общее для всех обработчиков страницы
pub type SharedStorage = Rc<dyn StoragePort>;

#[derive(Clone)]
pub struct WebStorage {
    storage: web_sys::Storage,
    area: &'static str,
}

impl WebStorage {
    pub fn local() -> Result<Self, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(|storage| Self {
                storage,
                area: "localStorage",
            })
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))
    }

    pub fn session() -> Result<Self, StorageError> {
        window()
            .and_then(|w| w.session_storage().ok().flatten())
            .map(|storage| Self {
                storage,
                area: "sessionStorage",
            })
            .ok_or_else(|| StorageError::Unavailable("sessionStorage".to_string()))
    }
}

impl StoragePort for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{}: {:?}", self.area, e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}

fn or_memory(storage: Result<WebStorage, StorageError>) -> SharedStorage {
    match storage {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("{}; using in-memory storage for this page", e);
            Rc::new(MemoryStorage::new())
        }
    }
}

/// localStorage страницы или память
pub fn local_storage() -> SharedStorage {
    or_memory(WebStorage::local())
}

/// sessionStorage страницы или память
pub fn session_storage() -> SharedStorage {
    or_memory(WebStorage::session())
}
