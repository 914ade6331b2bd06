pub mod page;
pub mod query;
pub mod reviews;

use self::page::ProductPage;
use self::query::ProductQuery;
use crate::domain::a002_cart::ui::CartHandle;
use crate::domain::a003_wishlist::ui::WishlistHandle;
use crate::shared::dom::{current_search, element_by_id};
use crate::shared::storage::SharedStorage;
use contracts::domain::a001_catalog::Catalog;
use contracts::domain::a002_cart::CartStore;
use contracts::domain::a003_wishlist::WishlistStore;
use contracts::domain::a004_review::{review_ref, ReviewStore};
use contracts::domain::a005_product_detail::{load_snapshot, resolve_product, ProductDetail};
use contracts::shared::config::StorefrontConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub type ReviewHandle = StoredValue<ReviewStore<SharedStorage>, LocalStorage>;

/// Хранилища, в которые пишет страница товара
#[derive(Clone, Copy)]
pub struct StoreHandles {
    pub cart: CartHandle,
    pub wishlist: WishlistHandle,
}

/// Монтирует страницу товара в `#product-detail` по `?id=` из адреса
pub fn mount_product_page(config: &StorefrontConfig, local: SharedStorage, session: SharedStorage) {
    let Some(root) = element_by_id("product-detail").and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        return;
    };

    let product_id = ProductQuery::parse(&current_search()).product_id();
    let product = resolve_product(
        &product_id,
        Catalog::seeded().get(&product_id),
        load_snapshot(&session, &product_id),
    );
    let reviews_ref = review_ref(Some(product.id.as_str()).filter(|id| !id.is_empty()), &product.title);
    log::debug!("product page for {} (reviews under {})", product_id, reviews_ref);

    let stores = StoreHandles {
        cart: StoredValue::new_local(CartStore::new(local.clone())),
        wishlist: StoredValue::new_local(WishlistStore::new(local.clone())),
    };
    let reviews: ReviewHandle = StoredValue::new_local(ReviewStore::new(local, &reviews_ref));
    let detail = ProductDetail::new(product);
    let timings = config.timings.clone();

    root.set_inner_html("");
    leptos::mount::mount_to(root, move || {
        view! { <ProductPage detail=detail stores=stores reviews=reviews timings=timings /> }
    })
    .forget();
}
