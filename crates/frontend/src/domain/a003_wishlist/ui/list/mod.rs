pub mod state;

use self::state::create_state;
use super::details::{WishlistForm, WishlistItemDetails};
use super::WishlistHandle;
use crate::shared::dom::confirm;
use crate::shared::timers::after;
use contracts::domain::a003_wishlist::{stats_of, visible_items, WishlistItem, WishlistItemId};
use contracts::enums::wishlist_sort::WishlistSort;
use leptos::prelude::*;

const URL_DISPLAY_LIMIT: usize = 50;

/// Цена карточки; нулевая или отсутствующая не показывается
pub fn price_label(price: Option<f64>) -> Option<String> {
    price
        .filter(|p| p.is_finite() && *p != 0.0)
        .map(|p| format!("₹{:.2}", p))
}

/// Обрезает длинную ссылку до `max` символов с многоточием
pub fn truncate_url(url: &str, max: usize) -> String {
    if url.chars().count() <= max {
        url.to_string()
    } else {
        format!("{}...", url.chars().take(max).collect::<String>())
    }
}

#[component]
#[allow(non_snake_case)]
pub fn WishlistPage(wishlist: WishlistHandle, success_ms: u32) -> impl IntoView {
    let state = create_state(wishlist.with_value(|w| w.sort_preference()));
    let (items, set_items) = signal::<Vec<WishlistItem>>(wishlist.with_value(|w| w.load()));
    let (editing, set_editing) = signal::<Option<WishlistForm>>(None);
    let (preview, set_preview) = signal::<Option<(String, String)>>(None);
    let (celebrate, set_celebrate) = signal(false);

    let visible = move || {
        let s = state.get();
        items.with(|all| visible_items(all, &s.term, s.sort))
    };
    let stats = move || items.with(|all| stats_of(all));

    let toggle_purchased =
        move |id: WishlistItemId| set_items.set(wishlist.with_value(|w| w.toggle_purchased(&id)));

    let delete_item = move |id: WishlistItemId| {
        if confirm("Are you sure you want to delete this item? This action cannot be undone.") {
            set_items.set(wishlist.with_value(|w| w.remove(&id)));
        }
    };

    let clear_all = move |_| {
        let count = items.with(Vec::len);
        if count == 0 {
            return;
        }
        if confirm(&format!(
            "Are you sure you want to delete all {} items? This action cannot be undone.",
            count
        )) {
            wishlist.with_value(|w| w.clear());
            set_items.set(Vec::new());
        }
    };

    let on_saved = Callback::new(move |saved: Vec<WishlistItem>| {
        let added = editing.with_untracked(|f| f.as_ref().map_or(false, |f| !f.is_edit()));
        set_items.set(saved);
        set_editing.set(None);
        if added {
            set_celebrate.set(true);
            after(success_ms, move || set_celebrate.set(false));
        }
    });
    let on_cancel = Callback::new(move |_| set_editing.set(None));

    let render_item = move |item: WishlistItem| {
        let purchased = item.purchased;
        let form = WishlistForm::from_item(&item);
        let toggle_id = item.id.clone();
        let delete_id = item.id.clone();
        let image = (!item.image.is_empty()).then(|| {
            let src = item.image.clone();
            let alt = item.image_alt.clone().unwrap_or_else(|| item.title.clone());
            let (open_src, open_alt) = (src.clone(), alt.clone());
            view! {
                <div class="item-image-container">
                    <img
                        class="item-image"
                        src=src
                        alt=alt
                        on:click=move |_| set_preview.set(Some((open_src.clone(), open_alt.clone())))
                    />
                </div>
            }
        });

        view! {
            <div class="item-card" class:purchased=purchased data-id=item.id.to_string()>
                {purchased.then(|| view! { <div class="purchased-label">"✅ Purchased"</div> })}
                {image}
                <div class="item-content">
                    <div class="item-title">{item.title.clone()}</div>
                    {item.link.clone().map(|link| {
                        let text = truncate_url(&link, URL_DISPLAY_LIMIT);
                        view! { <a href=link target="_blank" class="item-link">{text}</a> }
                    })}
                    {price_label(item.price).map(|p| view! { <div class="item-price">{p}</div> })}
                    {item.note.clone().map(|n| view! { <div class="item-note">{n}</div> })}
                    <div class="item-actions">
                        <button class="btn edit-btn" on:click=move |_| set_editing.set(Some(form.clone()))>
                            "✏️ Edit"
                        </button>
                        <button class="btn purchase-btn" on:click=move |_| toggle_purchased(toggle_id.clone())>
                            {if purchased { "↩️ Undo" } else { "✅ Mark Purchased" }}
                        </button>
                        <button class="btn delete-btn" on:click=move |_| delete_item(delete_id.clone())>
                            "🗑️ Delete"
                        </button>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <div class="wishlist-app">
            <div class="wishlist-stats">
                <div class="stat">
                    <span id="totalItems" class="stat-number">{move || stats().total}</span>
                    <span class="stat-label">"Total Items"</span>
                </div>
                <div class="stat">
                    <span id="purchasedItems" class="stat-number">{move || stats().purchased}</span>
                    <span class="stat-label">"Purchased"</span>
                </div>
            </div>

            <div class="wishlist-controls">
                <button
                    id="addItemBtn"
                    class="btn add-btn"
                    on:click=move |_| set_editing.set(Some(WishlistForm::default()))
                >
                    "+ Add Item"
                </button>
                <input
                    id="searchInput"
                    type="search"
                    placeholder="Search your wishlist..."
                    prop:value=move || state.with(|s| s.term.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        state.update(|s| s.term = term);
                    }
                />
                <select
                    id="sortSelect"
                    prop:value=move || state.with(|s| s.sort.code().to_string())
                    on:change=move |ev| {
                        let sort = WishlistSort::from_code_or_default(&event_target_value(&ev));
                        wishlist.with_value(|w| w.save_sort_preference(sort));
                        state.update(|s| s.sort = sort);
                    }
                >
                    {WishlistSort::all()
                        .into_iter()
                        .map(|sort| {
                            view! {
                                <option value=sort.code() selected=move || state.with(|s| s.sort == sort)>
                                    {sort.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div id="wishlistContainer" class="wishlist-container">
                {move || visible().into_iter().map(render_item).collect_view()}
            </div>

            <div
                id="emptyState"
                class="empty-state"
                style:display=move || if items.with(Vec::is_empty) { "block" } else { "none" }
            >
                <h3>"Your wishlist is empty"</h3>
                <p>"Add something you love to get started."</p>
            </div>

            <div
                id="clearSection"
                class="clear-section"
                style:display=move || {
                    if !items.with(Vec::is_empty) && !visible().is_empty() { "block" } else { "none" }
                }
            >
                <button id="clearAllBtn" class="btn clear-btn" on:click=clear_all>"Clear All"</button>
            </div>

            <div id="successAnimation" class="success-animation" class:show=move || celebrate.get()>
                "✓ Added to wishlist!"
            </div>

            {move || {
                editing
                    .get()
                    .map(|form| {
                        view! {
                            <WishlistItemDetails
                                form=form
                                wishlist=wishlist
                                on_saved=on_saved
                                on_cancel=on_cancel
                            />
                        }
                    })
            }}

            {move || {
                preview
                    .get()
                    .map(|(src, alt)| {
                        view! {
                            <div
                                class="image-modal"
                                style="position:fixed;top:0;left:0;width:100%;height:100%;background:rgba(0,0,0,0.8);display:flex;align-items:center;justify-content:center;z-index:10000"
                                on:click=move |_| set_preview.set(None)
                            >
                                <div
                                    class="image-modal-content"
                                    style="position:relative;max-width:90%;max-height:90%;background:white;border-radius:8px;overflow:hidden"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    <button class="image-close-btn" on:click=move |_| set_preview.set(None)>"×"</button>
                                    <img src=src alt=alt class="modal-image" style="max-width:100%;max-height:80vh;object-fit:contain"/>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(Some(1169.0)).as_deref(), Some("₹1169.00"));
        assert_eq!(price_label(Some(0.0)), None);
        assert_eq!(price_label(None), None);
    }

    #[test]
    fn test_truncate_url() {
        assert_eq!(truncate_url("https://a.in/x", 50), "https://a.in/x");
        let long = format!("https://shop.example/{}", "k".repeat(60));
        let shown = truncate_url(&long, 50);
        assert_eq!(shown.chars().count(), 53);
        assert!(shown.ends_with("..."));
    }
}
