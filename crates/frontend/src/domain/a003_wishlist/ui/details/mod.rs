pub mod view;
pub mod view_model;

pub use view::WishlistItemDetails;
pub use view_model::WishlistForm;
