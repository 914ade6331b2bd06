use super::reviews::ProductReviews;
use super::{ReviewHandle, StoreHandles};
use crate::shared::dom::alert;
use crate::shared::timers::after;
use contracts::domain::a002_cart::added_feedback;
use contracts::domain::a004_review::rating_stars;
use contracts::domain::a005_product_detail::ProductDetail;
use contracts::shared::config::Timings;
use contracts::shared::money::format_currency;
use leptos::prelude::*;

const ADD_TO_CART_LABEL: &str = "Add to cart";
const ADD_TO_WISHLIST_LABEL: &str = "Add to wishlist";
const NO_DESCRIPTION: &str = "No description available.";

#[component]
#[allow(non_snake_case)]
pub fn ProductPage(
    detail: ProductDetail,
    stores: StoreHandles,
    reviews: ReviewHandle,
    timings: Timings,
) -> impl IntoView {
    let product = detail.product().clone();
    let sizes = detail.sizes();
    let detail = RwSignal::new(detail);
    let (cart_label, set_cart_label) = signal(ADD_TO_CART_LABEL.to_string());
    let (wish_label, set_wish_label) = signal(ADD_TO_WISHLIST_LABEL.to_string());
    let (stars, rating_text) = rating_stars(product.rating);
    let cart_revert_ms = timings.cart_button_revert_ms;
    let wish_revert_ms = timings.wishlist_button_revert_ms;

    let add_to_cart = move |_| {
        let mut result = Ok(0);
        detail.update(|d| result = stores.cart.with_value(|cart| d.add_to_cart(cart)));
        match result {
            Ok(quantity) => {
                set_cart_label.set(added_feedback(quantity));
                after(cart_revert_ms, move || set_cart_label.set(ADD_TO_CART_LABEL.to_string()));
            }
            Err(e) => alert(&e.to_string()),
        }
    };

    let save_to_wishlist = move |_| {
        let saved = detail.with_untracked(|d| stores.wishlist.with_value(|w| d.save_to_wishlist(w)));
        if saved {
            set_wish_label.set("Saved".to_string());
            after(wish_revert_ms, move || set_wish_label.set(ADD_TO_WISHLIST_LABEL.to_string()));
        }
    };

    let description = if product.description.trim().is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        product.description.clone()
    };

    view! {
        <div class="product-detail-layout">
            <div class="product-gallery">
                <img id="p-image" src=product.image.clone() alt=product.title.clone() />
            </div>
            <div class="product-summary">
                <h1 id="p-title">{product.title.clone()}</h1>
                <div id="p-ratings" class="product-ratings">
                    <div class="star-rating">{stars}</div>
                    <span class="rating-number">{rating_text}</span>
                </div>
                <div id="p-price" class="product-price">
                    {format_currency(product.price)}
                    {product.old_price.map(|old| {
                        view! { " " <span id="p-old" class="old">{format_currency(old)}</span> }
                    })}
                </div>
                <p id="p-desc">{description}</p>

                <div id="size-buttons" class="size-buttons">
                    {sizes
                        .into_iter()
                        .map(|size| {
                            let label = size.clone();
                            let current = size.clone();
                            let data_size = size.clone();
                            view! {
                                <button
                                    type="button"
                                    class="btn size-btn"
                                    class:selected=move || detail.with(|d| d.selected_size() == Some(current.as_str()))
                                    data-size=data_size
                                    on:click=move |_| detail.update(|d| d.select_size(&size))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div
                    id="stock-info"
                    class="stock-info"
                    style:display=move || if detail.with(|d| d.can_add_to_cart()) { "" } else { "none" }
                >
                    {move || detail.with(|d| d.stock_label()).unwrap_or_default()}
                </div>

                <div class="product-actions">
                    <button
                        id="btn-addcart"
                        class="btn add-cart"
                        type="button"
                        disabled=move || !detail.with(|d| d.can_add_to_cart())
                        on:click=add_to_cart
                    >
                        {move || cart_label.get()}
                    </button>
                    <button id="btn-wish" class="btn wish" type="button" on:click=save_to_wishlist>
                        {move || wish_label.get()}
                    </button>
                </div>
            </div>
        </div>
        <ProductReviews catalog_reviews=product.reviews.clone() reviews=reviews feedback_ms=timings.review_feedback_ms />
    }
}
