//! Порт хранилища ключ-значение (localStorage / sessionStorage браузера).
//!
//! Вся логика корзины, избранного и отзывов работает через [`StoragePort`],
//! поэтому в тестах её можно гонять на [`MemoryStorage`]. Хранилище считается
//! best-effort: ошибки чтения дают пустую коллекцию, ошибки записи только
//! логируются.

mod memory;

pub use memory::MemoryStorage;

use super::error::StorageError;
use serde::{de::DeserializeOwned, Serialize};
use std::rc::Rc;

pub const CART_ITEMS_KEY: &str = "cartItems";
pub const WISHLIST_KEY: &str = "wishlist";
pub const WISHLIST_SORT_KEY: &str = "wishlist_sort";
const REVIEWS_PREFIX: &str = "product_reviews_";
const LAST_PRODUCT_PREFIX: &str = "lastProduct_";

/// Ключ сохранённых отзывов товара
pub fn reviews_key(product_ref: &str) -> String {
    format!("{}{}", REVIEWS_PREFIX, product_ref)
}

/// Ключ снимка товара в sessionStorage
pub fn last_product_key(product_id: &str) -> String {
    format!("{}{}", LAST_PRODUCT_PREFIX, product_id)
}

pub trait StoragePort {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: StoragePort + ?Sized> StoragePort for &S {
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

impl<S: StoragePort + ?Sized> StoragePort for Rc<S> {
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

/// Читает JSON-значение. Отсутствие ключа, ошибка хранилища или битый JSON дают `None`
pub fn load_json<T: DeserializeOwned>(storage: &impl StoragePort, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("storage read failed for {}: {}", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding unreadable value under {}: {}", key, e);
            None
        }
    }
}

/// Читает JSON-список; всё, что не является корректным массивом, считается пустым списком.
/// Нечитаемые элементы массива отбрасываются по одному, остальные сохраняются.
pub fn load_list<T: DeserializeOwned>(storage: &impl StoragePort, key: &str) -> Vec<T> {
    let raw: Vec<serde_json::Value> = load_json(storage, key).unwrap_or_default();
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("dropping unreadable entry {} under {}: {}", index, key, e);
                None
            }
        })
        .collect()
}

pub fn save_json<T: Serialize + ?Sized>(
    storage: &impl StoragePort,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.set(key, &raw)
}

/// Запись без подтверждения: ошибка уходит в лог, вызывающий продолжает с данными в памяти
pub fn save_best_effort<T: Serialize + ?Sized>(storage: &impl StoragePort, key: &str, value: &T) {
    if let Err(e) = save_json(storage, key, value) {
        log::warn!("storage write dropped: {}", e);
    }
}
