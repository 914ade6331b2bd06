use super::aggregate::Review;
use crate::shared::error::{ReviewError, ValidationError};
use crate::shared::storage::{load_list, reviews_key, save_json, StoragePort};
use chrono::Utc;

/// Ссылка на товар для ключа отзывов: id, а без него название с `_` вместо пробелов
pub fn review_ref(product_id: Option<&str>, title: &str) -> String {
    match product_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => format!("prod_{}", title.split_whitespace().collect::<Vec<_>>().join("_")),
    }
}

/// Отзывы одного товара в `product_reviews_<ref>`
pub struct ReviewStore<S: StoragePort> {
    storage: S,
    key: String,
}

impl<S: StoragePort> ReviewStore<S> {
    pub fn new(storage: S, product_ref: &str) -> Self {
        Self {
            storage,
            key: reviews_key(product_ref),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> Vec<Review> {
        load_list(&self.storage, &self.key)
    }

    /// Сохраняет отзыв первым в списке. Ошибка записи возвращается вызывающему.
    pub fn submit(&self, name: &str, rating: &str, text: &str) -> Result<Vec<Review>, ReviewError> {
        let review = Review::from_form(name, rating, text, Utc::now());
        if review.text.is_empty() {
            return Err(ValidationError::EmptyReview.into());
        }
        let mut saved = self.load();
        saved.insert(0, review);
        save_json(&self.storage, &self.key, &saved)?;
        log::debug!("review saved under {}", self.key);
        Ok(saved)
    }

    /// Отзывы для показа: сначала из каталога, затем сохранённые
    pub fn combined(&self, catalog: &[Review]) -> Vec<Review> {
        catalog.iter().cloned().chain(self.load()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::StorageError;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_review_ref() {
        assert_eq!(review_ref(Some("p3"), "ignored"), "p3");
        assert_eq!(review_ref(None, "Kota  Doria Saree"), "prod_Kota_Doria_Saree");
        assert_eq!(review_ref(Some(" "), "Tant"), "prod_Tant");
    }

    #[test]
    fn test_submit_prepends_and_persists() {
        let storage = MemoryStorage::new();
        let store = ReviewStore::new(&storage, "p1");
        store.submit("Anjali", "4", "Good").unwrap();
        let saved = store.submit("", "", "Great colour").unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].user, "Anonymous");
        assert_eq!(saved[0].rating, Some(5.0));
        assert_eq!(saved[1].text, "Good");
        assert_eq!(store.load(), saved);
        assert!(storage.get("product_reviews_p1").unwrap().is_some());
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let storage = MemoryStorage::new();
        let store = ReviewStore::new(&storage, "p1");
        assert_eq!(
            store.submit("Rekha", "5", "   "),
            Err(ReviewError::Validation(ValidationError::EmptyReview))
        );
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_storage_failure_surfaces() {
        let storage = MemoryStorage::new();
        storage.fail_writes(true);
        let store = ReviewStore::new(&storage, "p1");
        let err = store.submit("Rekha", "5", "Nice").unwrap_err();
        assert!(matches!(err, ReviewError::Storage(StorageError::Write { .. })));
        assert_eq!(err.to_string(), "Could not save your review.");
    }

    #[test]
    fn test_combined_catalog_first() {
        let storage = MemoryStorage::new();
        let store = ReviewStore::new(&storage, "p3");
        store.submit("Me", "4", "Mine").unwrap();
        let catalog = vec![Review {
            user: "Pooja".to_string(),
            rating: None,
            text: "So lightweight and elegant.".to_string(),
            created_at: None,
        }];
        let combined = store.combined(&catalog);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined[0].user, "Pooja");
        assert_eq!(combined[1].user, "Me");
    }
}
