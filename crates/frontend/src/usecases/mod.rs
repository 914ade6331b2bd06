pub mod u101_filter_listing;
pub mod u102_page_search;
pub mod u103_listing_cart;
pub mod u104_listing_wishlist;
pub mod u105_product_handoff;
