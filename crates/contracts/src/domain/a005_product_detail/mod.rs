pub mod detail;
pub mod snapshot;

pub use detail::{resolve_product, ProductDetail, DEFAULT_PRODUCT_ID};
pub use snapshot::{load_snapshot, save_snapshot, ProductSnapshot};
