//! Страница корзины: строки в `#cart-items`, итог в `#cart-total`

use crate::shared::dom::element_by_id;
use crate::shared::storage::SharedStorage;
use contracts::domain::a002_cart::{cart_total, CartItem, CartItemId, CartStore};
use contracts::shared::money::format_currency;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub type CartHandle = StoredValue<CartStore<SharedStorage>, LocalStorage>;

#[component]
#[allow(non_snake_case)]
pub fn CartItems(items: RwSignal<Vec<CartItem>>, cart: CartHandle) -> impl IntoView {
    let set_quantity = move |id: CartItemId, quantity: u32| {
        items.set(cart.with_value(|c| c.update_quantity(&id, quantity)));
    };
    let remove = move |id: CartItemId| items.set(cart.with_value(|c| c.remove(&id)));

    let render_row = move |item: CartItem| {
        let quantity = item.quantity;
        let (minus_id, plus_id, remove_id) = (item.id.clone(), item.id.clone(), item.id.clone());
        view! {
            <div class="cart-row">
                <img class="cart-item-image" src=item.image.clone() alt=item.name.clone() />
                <div class="cart-item-name">{item.name.clone()}</div>
                <div class="cart-item-price">{format_currency(item.price)}</div>
                <div class="cart-item-qty">
                    <button
                        class="qty-decrease"
                        type="button"
                        on:click=move |_| set_quantity(minus_id.clone(), quantity.saturating_sub(1))
                    >
                        "-"
                    </button>
                    <span class="qty-value">{quantity}</span>
                    <button
                        class="qty-increase"
                        type="button"
                        on:click=move |_| set_quantity(plus_id.clone(), quantity.saturating_add(1))
                    >
                        "+"
                    </button>
                </div>
                <div class="cart-item-total">{format_currency(item.line_total())}</div>
                <button class="cart-item-remove" on:click=move |_| remove(remove_id.clone())>
                    "Remove"
                </button>
            </div>
        }
    };

    view! {
        {move || {
            let rows = items.get();
            if rows.is_empty() {
                view! { <div class="cart-empty">"Your cart is empty."</div> }.into_any()
            } else {
                rows.into_iter().map(render_row).collect_view().into_any()
            }
        }}
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CartTotal(items: RwSignal<Vec<CartItem>>) -> impl IntoView {
    view! { {move || items.with(|all| format_currency(cart_total(all)))} }
}

fn html_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Монтирует корзину, если на странице есть оба контейнера
pub fn mount_cart_page(storage: SharedStorage) {
    let (Some(rows_root), Some(total_root)) = (html_by_id("cart-items"), html_by_id("cart-total")) else {
        return;
    };
    let cart: CartHandle = StoredValue::new_local(CartStore::new(storage));
    let items = RwSignal::new(cart.with_value(|c| c.load()));
    log::debug!("cart page: {} items", items.with_untracked(Vec::len));

    rows_root.set_inner_html("");
    total_root.set_inner_html("");
    leptos::mount::mount_to(rows_root, move || view! { <CartItems items=items cart=cart /> }).forget();
    leptos::mount::mount_to(total_root, move || view! { <CartTotal items=items /> }).forget();
}
