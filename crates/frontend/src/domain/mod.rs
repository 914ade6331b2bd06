pub mod a002_cart;
pub mod a003_wishlist;
pub mod a005_product_detail;
