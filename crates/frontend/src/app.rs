use crate::domain::a002_cart::ui::mount_cart_page;
use crate::domain::a003_wishlist::ui::mount_wishlist_page;
use crate::domain::a005_product_detail::ui::mount_product_page;
use crate::shared::storage::{local_storage, session_storage};
use crate::usecases::{
    u101_filter_listing, u102_page_search, u103_listing_cart, u104_listing_wishlist,
    u105_product_handoff,
};
use contracts::shared::config::StorefrontConfig;

/// Подключает всё, для чего на текущей странице есть разметка.
/// Каждая часть сама проверяет свои элементы и молча пропускает чужие страницы.
pub fn run(config: &StorefrontConfig) {
    let local = local_storage();
    let session = session_storage();

    u101_filter_listing::bind(config);
    u102_page_search::bind(config);
    u103_listing_cart::bind(config, local.clone());
    u104_listing_wishlist::bind(config, local.clone());
    u105_product_handoff::bind(config, session.clone());

    mount_cart_page(local.clone());
    mount_wishlist_page(config, local.clone());
    mount_product_page(config, local, session);
}
