use crate::shared::text::{normalize_text, normalize_whitespace};
use std::collections::{BTreeMap, BTreeSet};

/// Ценовой диапазон из ползунков; границы включительные
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Собирает диапазон из значений полей.
    ///
    /// `None` означает, что поля на странице нет. Одиночный ползунок задаёт
    /// только максимум и учитывается, лишь когда отдельных min/max полей нет.
    pub fn from_controls(
        min_input: Option<&str>,
        max_input: Option<&str>,
        single_input: Option<&str>,
    ) -> Self {
        let parse = |v: Option<&str>| v.and_then(|s| s.trim().parse::<f64>().ok()).filter(|n| n.is_finite());
        let mut range = Self {
            min: parse(min_input),
            max: parse(max_input),
        };
        if min_input.is_none() && max_input.is_none() {
            range.max = parse(single_input);
        }
        range
    }

    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Текущее состояние панели фильтров
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSelection {
    /// Заголовок группы -> отмеченные подписи
    pub active: BTreeMap<String, BTreeSet<String>>,
    pub price: PriceRange,
    /// Уже нормализованный поисковый запрос
    pub query: String,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, group: &str, label: &str) {
        self.active
            .entry(normalize_whitespace(group))
            .or_default()
            .insert(normalize_whitespace(label));
    }

    pub fn with_value(mut self, group: &str, label: &str) -> Self {
        self.select(group, label);
        self
    }

    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    pub fn with_query(mut self, raw: &str) -> Self {
        self.query = normalize_text(raw);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.active.values().all(BTreeSet::is_empty) && !self.price.is_active() && self.query.is_empty()
    }
}
