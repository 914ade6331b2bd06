//! Поиск по странице: все слова запроса должны встречаться в тексте карточки.
//! Мягче, чем фразовый поиск панели фильтров.

use super::card::{CardSource, ProductKey};
use super::strategy::data_value;

const TITLE_SELECTOR: &str = ".product-info span";
const IMAGE_SELECTOR: &str = "img.product-image";
const BADGE_SELECTOR: &str = ".badge";

/// Текст карточки для поиска: название, alt, бейджи, `data-search-extra`
pub fn searchable_text(card: &dyn CardSource) -> String {
    let title = card.text(TITLE_SELECTOR).unwrap_or_default();
    let alt = card.attr(IMAGE_SELECTOR, "alt").unwrap_or_default();
    let badges = card.texts(BADGE_SELECTOR).join(" ");
    let extras = data_value(card, "searchExtra").unwrap_or_default();
    [title, alt, badges, extras].join(" ").to_lowercase()
}

pub fn tokens(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

pub fn matches_tokens(hay: &str, tokens: &[String]) -> bool {
    tokens.iter().all(|t| hay.contains(t.as_str()))
}

/// Результат одного прогона поиска
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Видимость карточек в порядке индекса
    pub visible: Vec<bool>,
    pub match_count: usize,
    /// Текст для aria-live области
    pub announcement: String,
}

/// Индекс текста карточек, построенный один раз при загрузке страницы
#[derive(Debug, Clone, Default)]
pub struct PageSearchIndex {
    entries: Vec<(ProductKey, String)>,
}

impl PageSearchIndex {
    pub fn build<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn CardSource>,
    {
        let entries = cards
            .into_iter()
            .map(|card| (card.key(), searchable_text(card)))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn run(&self, raw_query: &str) -> SearchOutcome {
        let tokens = tokens(raw_query);
        if tokens.is_empty() {
            let total = self.entries.len();
            return SearchOutcome {
                visible: vec![true; total],
                match_count: total,
                announcement: format!("{} item{}", total, plural(total)),
            };
        }

        let visible: Vec<bool> = self
            .entries
            .iter()
            .map(|(_, hay)| matches_tokens(hay, &tokens))
            .collect();
        let match_count = visible.iter().filter(|v| **v).count();
        SearchOutcome {
            announcement: format!(
                "{} result{} for \"{}\"",
                match_count,
                plural(match_count),
                raw_query
            ),
            visible,
            match_count,
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
