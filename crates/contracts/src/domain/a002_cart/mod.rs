pub mod aggregate;
pub mod store;

pub use aggregate::{added_feedback, CartDraft, CartItem, CartItemId};
pub use store::{cart_total, CartStore};
