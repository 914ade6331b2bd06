pub mod wishlist_sort;
