pub mod aggregate;
pub mod store;

pub use aggregate::{WishlistDraft, WishlistItem, WishlistItemId};
pub use store::{sort_items, stats_of, visible_items, WishlistStats, WishlistStore};
