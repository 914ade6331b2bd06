pub mod details;
pub mod list;

use crate::shared::dom::element_by_id;
use crate::shared::storage::SharedStorage;
use contracts::domain::a003_wishlist::WishlistStore;
use contracts::shared::config::StorefrontConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub type WishlistHandle = StoredValue<WishlistStore<SharedStorage>, LocalStorage>;

/// Монтирует страницу избранного в `#wishlist-app`, если он есть
pub fn mount_wishlist_page(config: &StorefrontConfig, storage: SharedStorage) {
    let Some(root) = element_by_id("wishlist-app").and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    let wishlist: WishlistHandle = StoredValue::new_local(WishlistStore::new(storage));
    let success_ms = config.timings.notification_ms;
    root.set_inner_html("");
    leptos::mount::mount_to(root, move || {
        view! { <list::WishlistPage wishlist=wishlist success_ms=success_ms /> }
    })
    .forget();
    log::debug!("wishlist page mounted");
}
