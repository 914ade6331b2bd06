//! Ошибки витрины. Все они локальные: хранилище деградирует до пустых
//! списков, валидация превращается в короткое сообщение пользователю.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage write failed for {key}: {message}")]
    Write { key: String, message: String },

    #[error("Serialization failed: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name is missing")]
    MissingName,

    #[error("Product price is missing")]
    MissingPrice,

    #[error("Item name is required!")]
    MissingTitle,

    #[error("Selected size is out of stock")]
    OutOfStock,

    #[error("Please enter a short review.")]
    EmptyReview,
}

/// Отправка отзыва: единственное место, где сбой записи виден пользователю
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Could not save your review.")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid config format: {0}")]
    InvalidFormat(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::InvalidFormat(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_mentions_key() {
        let err = StorageError::Write {
            key: "cartItems".to_string(),
            message: "QuotaExceededError".to_string(),
        };
        assert!(err.to_string().contains("cartItems"));
        assert!(err.to_string().contains("QuotaExceededError"));
    }

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(ValidationError::OutOfStock.to_string(), "Selected size is out of stock");
        assert_eq!(ValidationError::EmptyReview.to_string(), "Please enter a short review.");
    }

    #[test]
    fn test_review_error_alerts() {
        let err: ReviewError = ValidationError::EmptyReview.into();
        assert_eq!(err.to_string(), "Please enter a short review.");
        let err: ReviewError = StorageError::Unavailable("private mode".to_string()).into();
        assert_eq!(err.to_string(), "Could not save your review.");
    }

    #[test]
    fn test_config_error_from_json() {
        let err: ConfigError = serde_json::from_str::<serde_json::Value>("{")
            .map_err(ConfigError::from)
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid config format"));
    }
}
