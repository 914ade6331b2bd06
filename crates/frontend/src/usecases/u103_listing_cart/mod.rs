//! Кнопки "в корзину" на карточках листинга

use crate::shared::card::DomCard;
use crate::shared::dom::{document_query_all, listen, query};
use crate::shared::storage::SharedStorage;
use crate::shared::timers::after;
use contracts::domain::a002_cart::{added_feedback, CartDraft, CartStore};
use contracts::filtering::CardSource;
use contracts::shared::config::{Selectors, StorefrontConfig};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlElement};

/// Блокирует кнопку (или ссылку) на время показа результата
fn set_busy(button: &Element, busy: bool) {
    if let Some(btn) = button.dyn_ref::<HtmlButtonElement>() {
        btn.set_disabled(busy);
    } else if let Some(html) = button.dyn_ref::<HtmlElement>() {
        let style = html.style();
        let _ = style.set_property("pointer-events", if busy { "none" } else { "auto" });
        let _ = style.set_property("opacity", if busy { "0.6" } else { "1" });
    }
}

fn add_from_card(
    card: &DomCard,
    button: &Element,
    cart: &CartStore<SharedStorage>,
    selectors: &Selectors,
    revert_ms: u32,
) {
    let item = match CartDraft::from_card(card, selectors) {
        Ok(draft) => draft.into_item(),
        Err(e) => {
            log::warn!("card {} not added to cart: {}", card.key(), e);
            return;
        }
    };
    let id = item.id.clone();
    cart.add(item);
    let quantity = cart.quantity_of(&id);
    log::debug!("cart item {} now has quantity {}", id, quantity);

    let original = button.text_content().unwrap_or_default();
    set_busy(button, true);
    button.set_text_content(Some(&added_feedback(quantity)));
    let button = button.clone();
    after(revert_ms, move || {
        set_busy(&button, false);
        button.set_text_content(Some(&original));
    });
}

pub fn bind(config: &StorefrontConfig, storage: SharedStorage) {
    let selectors = Rc::new(config.selectors.clone());
    let elements = document_query_all(&selectors.cards.join(", "));
    if elements.is_empty() {
        return;
    }

    let cart = Rc::new(CartStore::new(storage));
    let button_selector = selectors.add_to_cart.join(", ");
    let revert_ms = config.timings.cart_button_revert_ms;
    let mut bound = 0;
    for card in DomCard::collect(elements) {
        let Some(button) = query(card.element(), &button_selector) else {
            continue;
        };
        let cart = cart.clone();
        let selectors = selectors.clone();
        let target = button.clone();
        listen(&target, "click", move |ev| {
            ev.prevent_default();
            ev.stop_propagation();
            add_from_card(&card, &button, &cart, &selectors, revert_ms);
        });
        bound += 1;
    }
    log::debug!("add-to-cart bound on {} cards", bound);
}
