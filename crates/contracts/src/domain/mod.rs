pub mod a001_catalog;
pub mod a002_cart;
pub mod a003_wishlist;
pub mod a004_review;
pub mod a005_product_detail;
pub mod common;
