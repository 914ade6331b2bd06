use crate::domain::common::SizeVariant;
use crate::filtering::card::CardSource;
use crate::filtering::strategy::{first_attr, first_success, first_text, Strategy};
use crate::shared::config::Selectors;
use crate::shared::error::ValidationError;
use crate::shared::money::{extract_first_price, sanitize_price};
use serde::{Deserialize, Serialize};
use std::fmt;

const INFO_NAME_SELECTOR: &str = ".product-info span";
const PRICE_SECTION_SELECTOR: &str = ".price-section";

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор позиции корзины.
///
/// С листинга: `название|картинка` в нижнем регистре, со страницы товара:
/// `id товара|размер`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(pub String);

impl CartItemId {
    pub fn for_listing(name: &str, image: &str) -> Self {
        Self(format!(
            "{}|{}",
            name.trim().to_lowercase(),
            image.trim().to_lowercase()
        ))
    }

    pub fn for_variant(product_id: &str, size: &str) -> Self {
        Self(format!("{}|{}", product_id, size))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Позиция корзины, как она лежит в `cartItems`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default = "one")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<SizeVariant>,
}

fn one() -> u32 {
    1
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Данные позиции, собранные с карточки листинга до записи в корзину
#[derive(Debug, Clone, PartialEq)]
pub struct CartDraft {
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl CartDraft {
    /// Собирает черновик из карточки. Имя и цена обязательны.
    pub fn from_card(card: &dyn CardSource, selectors: &Selectors) -> Result<Self, ValidationError> {
        let by_selectors = |c: &dyn CardSource| first_text(c, &selectors.name);
        let by_info = |c: &dyn CardSource| {
            c.text(INFO_NAME_SELECTOR)
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
        };
        let by_alt = |c: &dyn CardSource| first_attr(c, &selectors.image, "alt");
        let name_strategies: [Strategy<'_, String>; 3] = [&by_selectors, &by_info, &by_alt];
        let name = first_success(card, &name_strategies).unwrap_or_default();

        let price = match first_text(card, &selectors.price) {
            Some(text) => sanitize_price(&text),
            None => card
                .text(PRICE_SECTION_SELECTOR)
                .map(|t| extract_first_price(t.trim()))
                .unwrap_or(0.0),
        };

        let image = first_attr(card, &selectors.image, "src").unwrap_or_default();

        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if price <= 0.0 {
            return Err(ValidationError::MissingPrice);
        }
        Ok(Self { name, price, image })
    }

    pub fn into_item(self) -> CartItem {
        CartItem {
            id: CartItemId::for_listing(&self.name, &self.image),
            name: self.name,
            price: self.price,
            image: self.image,
            quantity: 1,
            variant: None,
        }
    }
}

/// Текст кнопки после добавления
pub fn added_feedback(quantity: u32) -> String {
    if quantity == 1 {
        "1 product added".to_string()
    } else {
        format!("{} products added", quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::card::StaticCard;

    #[test]
    fn test_listing_id_is_case_and_space_insensitive() {
        assert_eq!(
            CartItemId::for_listing("  Banarasi Saree ", "./Images/S1.jpg"),
            CartItemId::for_listing("banarasi saree", "./images/s1.jpg")
        );
        assert_eq!(
            CartItemId::for_listing("A", "b.jpg").as_str(),
            "a|b.jpg"
        );
    }

    #[test]
    fn test_variant_id() {
        assert_eq!(CartItemId::for_variant("p2", "XL").as_str(), "p2|XL");
    }

    #[test]
    fn test_draft_from_product_markup() {
        let card = StaticCard::new("p1")
            .with_text(".product-name", " Banarasi Saree ")
            .with_text(".product-price", "₹1,499")
            .with_attr(".product-image", "src", "./images/s1.jpg");
        let draft = CartDraft::from_card(&card, &Selectors::default()).unwrap();
        assert_eq!(draft.name, "Banarasi Saree");
        assert_eq!(draft.price, 1499.0);
        assert_eq!(draft.image, "./images/s1.jpg");

        let item = draft.into_item();
        assert_eq!(item.id.as_str(), "banarasi saree|./images/s1.jpg");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_draft_falls_back_to_info_span_and_price_section() {
        let card = StaticCard::new("p4")
            .with_text(".product-info span", "Maheshwari Saree")
            .with_text(".price-section", "₹1,169 ₹1,299 (10% OFF)")
            .with_attr("img", "src", "./images/s4.jpg");
        let draft = CartDraft::from_card(&card, &Selectors::default()).unwrap();
        assert_eq!(draft.name, "Maheshwari Saree");
        assert_eq!(draft.price, 1169.0);
        assert_eq!(draft.image, "./images/s4.jpg");
    }

    #[test]
    fn test_draft_uses_image_alt_as_last_resort() {
        let card = StaticCard::new("x")
            .with_attr("img", "alt", "Silk Dupatta")
            .with_text(".card-price", "₹250");
        let draft = CartDraft::from_card(&card, &Selectors::default()).unwrap();
        assert_eq!(draft.name, "Silk Dupatta");
        assert_eq!(draft.price, 250.0);
    }

    #[test]
    fn test_draft_requires_name_and_price() {
        let no_name = StaticCard::new("x").with_text(".product-price", "₹100");
        assert_eq!(
            CartDraft::from_card(&no_name, &Selectors::default()),
            Err(ValidationError::MissingName)
        );
        let no_price = StaticCard::new("x").with_text(".product-name", "Kurta");
        assert_eq!(
            CartDraft::from_card(&no_price, &Selectors::default()),
            Err(ValidationError::MissingPrice)
        );
    }

    #[test]
    fn test_added_feedback() {
        assert_eq!(added_feedback(1), "1 product added");
        assert_eq!(added_feedback(3), "3 products added");
    }

    #[test]
    fn test_item_tolerates_missing_fields() {
        let item: CartItem = serde_json::from_str(r#"{"id":"a|b","name":"A"}"#).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, 0.0);
        assert!(item.variant.is_none());
    }
}
