use crate::domain::common::lenient_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const ANONYMOUS: &str = "Anonymous";
const DEFAULT_RATING: f64 = 5.0;

/// Отзыв о товаре: из каталога (только автор и текст) или оставленный на странице
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub text: String,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Отзыв из полей формы; пустое имя становится "Anonymous", нечитаемая оценка 5
    pub fn from_form(name: &str, rating: &str, text: &str, now: DateTime<Utc>) -> Self {
        let name = name.trim();
        Self {
            user: if name.is_empty() {
                ANONYMOUS.to_string()
            } else {
                name.to_string()
            },
            rating: Some(
                rating
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|r| r.is_finite() && *r > 0.0)
                    .unwrap_or(DEFAULT_RATING),
            ),
            text: text.trim().to_string(),
            created_at: Some(now),
        }
    }

    /// Имя для отображения
    pub fn author(&self) -> &str {
        if self.user.is_empty() {
            "User"
        } else {
            &self.user
        }
    }

    /// Подпись оценки после имени автора; без оценки пустая строка
    pub fn rating_label(&self) -> String {
        self.rating
            .map(|r| format!(" \u{2014} {}\u{2605}", r))
            .unwrap_or_default()
    }
}

/// Звёзды рейтинга товара: `★` по целой части, `☆` до пяти, и подпись
///
/// 4.6 -> ("★★★★☆", "(4.6)"), нет рейтинга -> ("☆☆☆☆☆", "N/A")
pub fn rating_stars(rating: Option<f64>) -> (String, String) {
    match rating.filter(|r| r.is_finite() && *r > 0.0) {
        Some(r) => {
            let full = (r.floor() as usize).min(5);
            (
                format!("{}{}", "★".repeat(full), "☆".repeat(5 - full)),
                format!("({})", r),
            )
        }
        None => ("☆".repeat(5), "N/A".to_string()),
    }
}
