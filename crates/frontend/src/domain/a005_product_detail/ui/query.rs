use contracts::domain::a005_product_detail::DEFAULT_PRODUCT_ID;
use serde::Deserialize;

/// Параметры адреса страницы товара
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ProductQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl ProductQuery {
    /// Разбирает `location.search`; нечитаемая строка даёт пустой запрос
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_else(|e| {
            log::warn!("could not parse query {:?}: {}", search, e);
            Self::default()
        })
    }

    pub fn product_id(&self) -> String {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_PRODUCT_ID)
            .to_string()
    }
}
