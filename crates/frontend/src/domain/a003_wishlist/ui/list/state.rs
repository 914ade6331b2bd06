use contracts::enums::wishlist_sort::WishlistSort;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct WishlistListState {
    pub term: String,
    pub sort: WishlistSort,
}

pub fn create_state(sort: WishlistSort) -> RwSignal<WishlistListState> {
    RwSignal::new(WishlistListState {
        term: String::new(),
        sort,
    })
}
