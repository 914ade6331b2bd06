use crate::domain::common::{lenient_timestamp, SizeVariant};
use crate::filtering::card::CardSource;
use crate::shared::error::ValidationError;
use crate::shared::money::rupee_price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const UNKNOWN_TITLE: &str = "Unknown Product";

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор записи избранного: случайный UUID либо `id товара|размер`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WishlistItemId(pub String);

impl WishlistItemId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn for_variant(product_id: &str, size: &str) -> Self {
        Self(format!("{}|{}", product_id, size))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WishlistItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Запись избранного в `wishlist`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: WishlistItemId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub purchased: bool,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<SizeVariant>,
}

impl WishlistItem {
    /// Новая запись из формы: случайный id, не куплено, создано сейчас
    pub fn from_draft(draft: WishlistDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: WishlistItemId::new_v4(),
            title: draft.title,
            link: draft.link,
            price: draft.price,
            image: draft.image,
            image_alt: None,
            note: draft.note,
            purchased: false,
            created_at: Some(now),
            variant: None,
        }
    }

    /// Переписывает редактируемые поля, id/статус/дата остаются
    pub fn apply(&mut self, draft: WishlistDraft) {
        self.title = draft.title;
        self.link = draft.link;
        self.price = draft.price;
        self.image = draft.image;
        self.note = draft.note;
    }

    /// Запись для сердечка на карточке листинга
    pub fn from_listing(
        card: &dyn CardSource,
        page_url: &str,
        page_title: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let title = card
            .text(".product-info span")
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
        let price = card.text(".price-section").and_then(|t| rupee_price(&t));
        let image = card.attr(".product-image", "src").unwrap_or_default();
        let image_alt = card
            .attr(".product-image", "alt")
            .unwrap_or_else(|| title.clone());
        Self {
            id: WishlistItemId::new_v4(),
            note: Some(format!("Added from {}", page_title)),
            title,
            link: Some(page_url.to_string()),
            price,
            image,
            image_alt: Some(image_alt),
            purchased: false,
            created_at: Some(now),
            variant: None,
        }
    }

    /// Совпадение карточки листинга с записью: по названию и ссылке
    pub fn is_listing(&self, title: &str, link: Option<&str>) -> bool {
        self.title == title && self.link.as_deref() == link
    }

    /// Поиск по названию или заметке без учёта регистра
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.title.to_lowercase().contains(&term)
            || self
                .note
                .as_deref()
                .map_or(false, |n| n.to_lowercase().contains(&term))
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Поля формы добавления/редактирования
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WishlistDraft {
    pub title: String,
    pub link: Option<String>,
    pub price: Option<f64>,
    pub image: String,
    pub note: Option<String>,
}

impl WishlistDraft {
    /// Собирает черновик из сырых значений полей формы
    pub fn from_form(
        title: &str,
        link: &str,
        price: &str,
        image: &str,
        note: &str,
    ) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        Ok(Self {
            title: title.to_string(),
            link: non_empty(link),
            price: price.trim().parse::<f64>().ok().filter(|p| p.is_finite()),
            image: image.trim().to_string(),
            note: non_empty(note),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
