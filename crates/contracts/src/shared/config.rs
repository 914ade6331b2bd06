use super::error::ConfigError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorefrontConfig {
    pub log_level: String,
    pub timings: Timings,
    pub selectors: Selectors,
}

/// Задержки в миллисекундах
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Timings {
    pub filter_debounce_ms: u32,
    pub search_debounce_ms: u32,
    pub cart_button_revert_ms: u32,
    pub wishlist_button_revert_ms: u32,
    pub notification_ms: u32,
    pub review_feedback_ms: u32,
}

/// Варианты разметки карточек листинга; порядок задаёт приоритет
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Selectors {
    pub cards: Vec<String>,
    pub add_to_cart: Vec<String>,
    pub name: Vec<String>,
    pub price: Vec<String>,
    pub image: Vec<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            timings: Timings::default(),
            selectors: Selectors::default(),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            filter_debounce_ms: 120,
            search_debounce_ms: 150,
            cart_button_revert_ms: 1500,
            wishlist_button_revert_ms: 800,
            notification_ms: 2000,
            review_feedback_ms: 1200,
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        fn list(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        Self {
            cards: list(&[".product", ".product-card", ".card", ".pro"]),
            add_to_cart: list(&[".add-to-cart", ".card-btn", ".cart-btn"]),
            name: list(&[".product-name", ".card-title", ".des h5"]),
            price: list(&[".product-price", ".card-price", ".des h4"]),
            image: list(&[".product-image", "img"]),
        }
    }
}

impl StorefrontConfig {
    /// Уровень логирования; неизвестное значение трактуется как debug
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

/// Загружает конфигурацию страницы
///
/// `page_config` - текст встроенного JSON-блока; пропущенные поля и секции
/// берутся из реализаций `Default` выше.
pub fn load_config(page_config: Option<&str>) -> Result<StorefrontConfig, ConfigError> {
    match page_config.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => Ok(serde_json::from_str(raw)?),
        None => Ok(StorefrontConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.timings.filter_debounce_ms, 120);
        assert_eq!(config.selectors.cards[0], ".product");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some(r#"{ "timings": { "search_debounce_ms": 300 } }"#)).unwrap();
        assert_eq!(config.timings.search_debounce_ms, 300);
        assert_eq!(config.timings.cart_button_revert_ms, 1500);
        assert_eq!(config.selectors, Selectors::default());
    }

    #[test]
    fn test_empty_override_equals_missing_block() {
        let empty = load_config(Some("{}")).unwrap();
        let partial = load_config(Some(r#"{ "timings": {}, "selectors": {} }"#)).unwrap();
        assert_eq!(empty, load_config(None).unwrap());
        assert_eq!(partial, StorefrontConfig::default());
        assert_eq!(empty.timings.wishlist_button_revert_ms, 800);
        assert_eq!(empty.selectors.add_to_cart[0], ".add-to-cart");
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(load_config(Some("{ timings: ")).is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = StorefrontConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "WARN".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
