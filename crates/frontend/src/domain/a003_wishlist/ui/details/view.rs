use super::view_model::{WishlistDetailsViewModel, WishlistForm};
use super::super::WishlistHandle;
use contracts::domain::a003_wishlist::WishlistItem;
use leptos::prelude::*;

fn text_field(
    vm: WishlistDetailsViewModel,
    label: &'static str,
    id: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    get: fn(&WishlistForm) -> String,
    set: fn(&mut WishlistForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                name=id
                step="any"
                placeholder=placeholder
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn WishlistItemDetails(
    form: WishlistForm,
    wishlist: WishlistHandle,
    on_saved: Callback<Vec<WishlistItem>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = WishlistDetailsViewModel::new(form);

    view! {
        <div id="itemModal" class="modal show" on:click=move |_| on_cancel.run(())>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 id="modalTitle">{vm.heading()}</h2>
                    <button id="closeModal" class="close-btn" type="button" on:click=move |_| on_cancel.run(())>
                        "×"
                    </button>
                </div>

                <form
                    id="itemForm"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        if let Some(items) = vm.save_command(wishlist) {
                            on_saved.run(items);
                        }
                    }
                >
                    {text_field(vm, "Item Name *", "itemTitle", "text", "What do you want?",
                        |f| f.title.clone(), |f, v| f.title = v)}
                    {text_field(vm, "Link", "itemLink", "url", "https://",
                        |f| f.link.clone(), |f, v| f.link = v)}
                    {text_field(vm, "Price (₹)", "itemPrice", "number", "0.00",
                        |f| f.price.clone(), |f, v| f.price = v)}
                    {text_field(vm, "Image URL", "itemImage", "url", "https://",
                        |f| f.image.clone(), |f, v| f.image = v)}

                    <div class="form-group">
                        <label for="itemNote">"Note"</label>
                        <textarea
                            id="itemNote"
                            name="note"
                            rows="3"
                            placeholder="Size, colour, occasion..."
                            prop:value=move || vm.form.with(|f| f.note.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.note = value);
                            }
                        />
                    </div>

                    <div class="form-actions">
                        <button id="cancelBtn" class="btn cancel-btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn save-btn" type="submit">"Save Item"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
