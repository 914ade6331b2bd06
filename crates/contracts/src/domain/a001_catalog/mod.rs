pub mod aggregate;
mod seed;

pub use aggregate::{CatalogProduct, ProductVariants};

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static SEEDED: Lazy<Catalog> = Lazy::new(|| Catalog::from_json(seed::CATALOG_SEED));

/// Каталог товаров по id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<String, CatalogProduct>,
}

impl Catalog {
    /// Встроенный каталог страницы
    pub fn seeded() -> &'static Catalog {
        &SEEDED
    }

    /// Разбирает JSON-массив товаров; битый документ даёт пустой каталог
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Vec<CatalogProduct>>(raw) {
            Ok(list) => Self::from_products(list),
            Err(e) => {
                log::error!("catalog seed is unreadable: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_products(list: Vec<CatalogProduct>) -> Self {
        Self {
            products: list.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&CatalogProduct> {
        self.products.get(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 12);
        let p2 = catalog.get("p2").unwrap();
        assert_eq!(p2.title, "Kanjivaram Saree");
        assert_eq!(p2.old_price, Some(1599.0));
        assert_eq!(p2.stock_of("XXL"), 0);
        assert_eq!(p2.reviews.len(), 2);
        assert!(catalog.get("p13").is_none());
    }

    #[test]
    fn test_broken_json_is_empty_catalog() {
        assert!(Catalog::from_json("[{").is_empty());
    }
}
