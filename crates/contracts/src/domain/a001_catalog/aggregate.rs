use crate::domain::a004_review::Review;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DEFAULT_SIZES: [&str; 5] = ["S", "M", "L", "XL", "XXL"];
const DEFAULT_STOCK: u32 = 5;

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub old_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub variants: Option<ProductVariants>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Размеры и остатки по размерам
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariants {
    pub sizes: Vec<String>,
    #[serde(default)]
    pub stock: BTreeMap<String, u32>,
}

impl ProductVariants {
    /// S..XXL по 5 штук для товаров без описанных вариантов
    pub fn standard() -> Self {
        Self {
            sizes: DEFAULT_SIZES.iter().map(|s| s.to_string()).collect(),
            stock: DEFAULT_SIZES
                .iter()
                .map(|s| (s.to_string(), DEFAULT_STOCK))
                .collect(),
        }
    }

    pub fn stock_of(&self, size: &str) -> u32 {
        self.stock.get(size).copied().unwrap_or(0)
    }

    /// Уменьшает локальный остаток на единицу, не уходя ниже нуля
    pub fn take_one(&mut self, size: &str) {
        if let Some(count) = self.stock.get_mut(size) {
            *count = count.saturating_sub(1);
        }
    }
}

impl CatalogProduct {
    /// Заглушка, когда товар не найден ни в каталоге, ни в сессии
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: "Product details not available".to_string(),
            price: 0.0,
            old_price: None,
            image: String::new(),
            description: "Product information was not found. Please open the product from the listing page so details are passed through.".to_string(),
            rating: None,
            variants: None,
            reviews: Vec::new(),
        }
    }

    /// Размеры товара, без вариантов стандартная линейка
    pub fn sizes(&self) -> Vec<String> {
        self.variants
            .as_ref()
            .map(|v| v.sizes.clone())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| ProductVariants::standard().sizes)
    }

    pub fn stock_of(&self, size: &str) -> u32 {
        self.variants.as_ref().map_or(0, |v| v.stock_of(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_variants() {
        let v = ProductVariants::standard();
        assert_eq!(v.sizes, ["S", "M", "L", "XL", "XXL"]);
        assert_eq!(v.stock_of("XL"), 5);
        assert_eq!(v.stock_of("XXXL"), 0);
    }

    #[test]
    fn test_take_one_saturates() {
        let mut v = ProductVariants {
            sizes: vec!["S".to_string()],
            stock: [("S".to_string(), 1)].into_iter().collect(),
        };
        v.take_one("S");
        v.take_one("S");
        assert_eq!(v.stock_of("S"), 0);
    }

    #[test]
    fn test_deserialize_partial_product() {
        let p: CatalogProduct =
            serde_json::from_str(r#"{"id":"p9","title":"Tant Saree","price":1169,"oldPrice":null}"#)
                .unwrap();
        assert_eq!(p.price, 1169.0);
        assert_eq!(p.old_price, None);
        assert!(p.reviews.is_empty());
        assert_eq!(p.sizes().len(), 5);
        assert_eq!(p.stock_of("S"), 0);
    }
}
