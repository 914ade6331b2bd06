//! Переход с карточки листинга на страницу товара через снимок в sessionStorage

use crate::shared::card::DomCard;
use crate::shared::dom::{closest_from_event, document, listen, navigate_to};
use crate::shared::storage::SharedStorage;
use contracts::domain::a001_catalog::Catalog;
use contracts::domain::a005_product_detail::{save_snapshot, ProductSnapshot};
use contracts::shared::config::StorefrontConfig;

const CARD_SELECTOR: &str = ".product-card[data-pid]";
const PRODUCT_PAGE: &str = "product.html";

pub fn product_url(product_id: &str) -> String {
    format!("{}?id={}", PRODUCT_PAGE, urlencoding::encode(product_id))
}

pub fn bind(config: &StorefrontConfig, session: SharedStorage) {
    let Some(document) = document() else {
        return;
    };
    let ignored = {
        let mut selectors = vec!["button".to_string(), ".wishlist-icon".to_string()];
        selectors.extend(config.selectors.add_to_cart.iter().cloned());
        selectors.join(", ")
    };

    listen(&document, "click", move |ev| {
        if closest_from_event(&ev, &ignored).is_some() {
            return;
        }
        let Some(element) = closest_from_event(&ev, CARD_SELECTOR) else {
            return;
        };
        let card = DomCard::new(element, 0);
        let Some(product_id) = card.product_id() else {
            return;
        };

        let snapshot = ProductSnapshot::from_card(&card, &product_id, Catalog::seeded().get(&product_id));
        if let Err(e) = save_snapshot(&session, &snapshot) {
            log::warn!("product snapshot for {} not saved: {}", product_id, e);
        }
        navigate_to(&product_url(&product_id));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_url_encodes_id() {
        assert_eq!(product_url("p6"), "product.html?id=p6");
        assert_eq!(product_url("a b&c"), "product.html?id=a%20b%26c");
    }
}
