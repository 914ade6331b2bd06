pub mod aggregate;
pub mod store;

pub use aggregate::{rating_stars, Review};
pub use store::{review_ref, ReviewStore};
