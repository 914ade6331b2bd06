use crate::domain::a001_catalog::{CatalogProduct, ProductVariants};
use crate::domain::a004_review::Review;
use crate::filtering::card::CardSource;
use crate::shared::money::first_integer_run;
use crate::shared::storage::{last_product_key, load_json, save_json, StoragePort};
use crate::shared::StorageError;
use serde::{Deserialize, Serialize};

const HANDOFF_DESCRIPTION: &str = "No extended description available. Click to view details.";
const HANDOFF_RATING: f64 = 4.2;

/// Снимок товара в sessionStorage для перехода листинг -> страница товара.
///
/// Все поля необязательны: при показе снимок накладывается поверх записи каталога.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: String,
    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    #[serde(default, alias = "img", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, alias = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<ProductVariants>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

impl ProductSnapshot {
    /// Снимок с карточки листинга по её `data-pid`.
    ///
    /// Описание и рейтинг-заглушка пишутся только для товаров вне каталога.
    pub fn from_card(card: &dyn CardSource, product_id: &str, catalog: Option<&CatalogProduct>) -> Self {
        let title = card
            .text(".product-info span")
            .or_else(|| card.attr("img", "alt"))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let price = card
            .text(".price-section")
            .and_then(|t| first_integer_run(&t))
            .map(|p| p as f64);
        let old_price = card
            .text(".old-price")
            .and_then(|t| first_integer_run(&t))
            .map(|p| p as f64);
        let image = card
            .attr(".product-image", "src")
            .or_else(|| card.attr("img", "src"));
        Self {
            id: product_id.to_string(),
            title,
            price,
            old_price,
            image,
            description: catalog
                .is_none()
                .then(|| HANDOFF_DESCRIPTION.to_string()),
            rating: catalog.is_none().then_some(HANDOFF_RATING),
            variants: None,
            reviews: None,
        }
    }

    /// Накладывает заданные поля снимка на товар
    pub fn overlay(self, product: &mut CatalogProduct) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if self.old_price.is_some() {
            product.old_price = self.old_price;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if self.rating.is_some() {
            product.rating = self.rating;
        }
        if self.variants.is_some() {
            product.variants = self.variants;
        }
        if let Some(reviews) = self.reviews {
            product.reviews = reviews;
        }
    }
}

pub fn save_snapshot(session: &impl StoragePort, snapshot: &ProductSnapshot) -> Result<(), StorageError> {
    save_json(session, &last_product_key(&snapshot.id), snapshot)
}

pub fn load_snapshot(session: &impl StoragePort, product_id: &str) -> Option<ProductSnapshot> {
    load_json(session, &last_product_key(product_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog::Catalog;
    use crate::filtering::card::StaticCard;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_snapshot_from_card() {
        let card = StaticCard::new("p4")
            .with_text(".product-info span", "Maheshwari Saree")
            .with_text(".price-section", "₹1,169 ₹1,299")
            .with_text(".old-price", "₹1,299")
            .with_attr(".product-image", "src", "./images/s4.jpg");
        let snapshot = ProductSnapshot::from_card(&card, "p4", None);
        assert_eq!(snapshot.title.as_deref(), Some("Maheshwari Saree"));
        assert_eq!(snapshot.price, Some(1169.0));
        assert_eq!(snapshot.old_price, Some(1299.0));
        assert_eq!(snapshot.rating, Some(4.2));
        assert!(snapshot.description.is_some());

        let known = ProductSnapshot::from_card(&card, "p4", Catalog::seeded().get("p4"));
        assert_eq!(known.rating, None);
        assert_eq!(known.description, None);
        assert_eq!(known.reviews, None);
    }

    #[test]
    fn test_session_round_trip() {
        let session = MemoryStorage::new();
        let snapshot = ProductSnapshot {
            id: "p7".to_string(),
            title: Some("Patola Saree".to_string()),
            ..ProductSnapshot::default()
        };
        save_snapshot(&session, &snapshot).unwrap();
        assert!(session.get("lastProduct_p7").unwrap().is_some());
        assert_eq!(load_snapshot(&session, "p7"), Some(snapshot));
        assert_eq!(load_snapshot(&session, "p8"), None);
    }

    #[test]
    fn test_legacy_field_aliases() {
        let snapshot: ProductSnapshot = serde_json::from_str(
            r#"{"id":"x1","name":"Dupatta","img":"d.jpg","desc":"Soft","price":250}"#,
        )
        .unwrap();
        assert_eq!(snapshot.title.as_deref(), Some("Dupatta"));
        assert_eq!(snapshot.image.as_deref(), Some("d.jpg"));
        assert_eq!(snapshot.description.as_deref(), Some("Soft"));
    }

    #[test]
    fn test_overlay_keeps_catalog_fields_not_in_snapshot() {
        let mut product = Catalog::seeded().get("p2").cloned().unwrap();
        ProductSnapshot {
            id: "p2".to_string(),
            price: Some(749.0),
            ..ProductSnapshot::default()
        }
        .overlay(&mut product);
        assert_eq!(product.price, 749.0);
        assert_eq!(product.title, "Kanjivaram Saree");
        assert_eq!(product.old_price, Some(1599.0));
        assert_eq!(product.reviews.len(), 2);
    }
}
