use super::super::WishlistHandle;
use crate::shared::dom::alert;
use contracts::domain::a003_wishlist::{WishlistDraft, WishlistItem, WishlistItemId};
use contracts::shared::ValidationError;
use leptos::prelude::*;

/// Сырые значения полей формы добавления/редактирования
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WishlistForm {
    pub edit_id: Option<WishlistItemId>,
    pub title: String,
    pub link: String,
    pub price: String,
    pub image: String,
    pub note: String,
}

impl WishlistForm {
    pub fn from_item(item: &WishlistItem) -> Self {
        Self {
            edit_id: Some(item.id.clone()),
            title: item.title.clone(),
            link: item.link.clone().unwrap_or_default(),
            price: item.price.map(|p| p.to_string()).unwrap_or_default(),
            image: item.image.clone(),
            note: item.note.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.edit_id.is_some()
    }

    pub fn draft(&self) -> Result<WishlistDraft, ValidationError> {
        WishlistDraft::from_form(&self.title, &self.link, &self.price, &self.image, &self.note)
    }
}

/// ViewModel формы записи избранного
#[derive(Clone, Copy)]
pub struct WishlistDetailsViewModel {
    pub form: RwSignal<WishlistForm>,
}

impl WishlistDetailsViewModel {
    pub fn new(form: WishlistForm) -> Self {
        Self {
            form: RwSignal::new(form),
        }
    }

    pub fn heading(&self) -> &'static str {
        if self.form.with_untracked(WishlistForm::is_edit) {
            "Edit Item"
        } else {
            "Add New Item"
        }
    }

    /// Сохраняет форму; при ошибке валидации показывает alert и возвращает `None`
    pub fn save_command(&self, wishlist: WishlistHandle) -> Option<Vec<WishlistItem>> {
        let form = self.form.get_untracked();
        let draft = match form.draft() {
            Ok(draft) => draft,
            Err(e) => {
                alert(&e.to_string());
                return None;
            }
        };
        let items = wishlist.with_value(|w| match &form.edit_id {
            Some(id) => w.update(id, draft),
            None => w.add(draft),
        });
        Some(items)
    }
}
