//! Сердечко избранного на карточках листинга

use crate::shared::card::DomCard;
use crate::shared::dom::{closest_from_event, current_href, document, document_query_all, listen, page_title, query};
use crate::shared::notification::{show_notification, NotificationKind};
use crate::shared::storage::SharedStorage;
use chrono::Utc;
use contracts::domain::a003_wishlist::{WishlistItem, WishlistStore};
use contracts::shared::config::StorefrontConfig;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

const ICON_SELECTOR: &str = ".wishlist-icon";
const CARD_SELECTOR: &str = ".product-card";
const ACTIVE_COLOR: &str = "#ff7300";
const INACTIVE_COLOR: &str = "#999";

fn paint_icon(icon: &Element, saved: bool) {
    let color = if saved { ACTIVE_COLOR } else { INACTIVE_COLOR };
    if let Some(html) = icon.dyn_ref::<HtmlElement>() {
        let style = html.style();
        let _ = style.set_property("border-color", color);
        let _ = style.set_property("color", color);
    }
    if let Some(path) = query(icon, "svg path") {
        let _ = path.set_attribute("fill", if saved { ACTIVE_COLOR } else { "none" });
    }
}

fn listing_item(card: &Element) -> WishlistItem {
    WishlistItem::from_listing(
        &DomCard::new(card.clone(), 0),
        &current_href(),
        &page_title(),
        Utc::now(),
    )
}

/// Раскрашивает сердечки по текущему содержимому избранного
fn paint_all(wishlist: &WishlistStore<SharedStorage>) {
    for icon in document_query_all(ICON_SELECTOR) {
        let Some(card) = icon.closest(CARD_SELECTOR).ok().flatten() else {
            continue;
        };
        let item = listing_item(&card);
        paint_icon(&icon, wishlist.contains_listing(&item.title, item.link.as_deref()));
    }
}

pub fn bind(config: &StorefrontConfig, storage: SharedStorage) {
    let Some(document) = document() else {
        return;
    };
    let wishlist = WishlistStore::new(storage);
    paint_all(&wishlist);

    let duration = config.timings.notification_ms;
    listen(&document, "click", move |ev| {
        let Some(icon) = closest_from_event(&ev, ICON_SELECTOR) else {
            return;
        };
        ev.prevent_default();
        ev.stop_propagation();
        let Some(card) = icon.closest(CARD_SELECTOR).ok().flatten() else {
            return;
        };

        let saved = wishlist.toggle_listing(listing_item(&card));
        paint_icon(&icon, saved);
        if saved {
            show_notification("Added to wishlist! 💖", NotificationKind::Added, duration);
        } else {
            show_notification("Removed from wishlist", NotificationKind::Removed, duration);
        }
    });
}
