//! Абстракция карточки товара поверх разметки.
//!
//! Во фронтенде её реализует обёртка над `web_sys::Element`, в тестах
//! [`StaticCard`].

use std::collections::HashMap;
use std::fmt;

/// Стабильный ключ карточки: `data-pid` либо позиция в сетке
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductKey(pub String);

impl ProductKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Ключ по позиции, когда у карточки нет `data-pid`
    pub fn positional(index: usize) -> Self {
        Self(format!("card-{}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait CardSource {
    fn key(&self) -> ProductKey;

    /// `data-*` атрибут самой карточки по ключу dataset (camelCase)
    fn data(&self, key: &str) -> Option<String>;

    /// textContent первого совпавшего потомка
    fn text(&self, selector: &str) -> Option<String>;

    /// textContent всех совпавших потомков в порядке документа
    fn texts(&self, selector: &str) -> Vec<String>;

    /// Атрибут первого совпавшего потомка
    fn attr(&self, selector: &str, name: &str) -> Option<String>;
}

/// Карточка, собранная в памяти
#[derive(Debug, Clone, Default)]
pub struct StaticCard {
    key: String,
    data: HashMap<String, String>,
    texts: HashMap<String, Vec<String>>,
    attrs: HashMap<(String, String), String>,
}

impl StaticCard {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    /// Добавляет элемент с текстом; повторный вызов с тем же селектором добавляет ещё один
    pub fn with_text(mut self, selector: &str, text: &str) -> Self {
        self.texts
            .entry(selector.to_string())
            .or_default()
            .push(text.to_string());
        self
    }

    pub fn with_attr(mut self, selector: &str, name: &str, value: &str) -> Self {
        self.attrs
            .insert((selector.to_string(), name.to_string()), value.to_string());
        self
    }
}

impl CardSource for StaticCard {
    fn key(&self) -> ProductKey {
        ProductKey::new(self.key.clone())
    }

    fn data(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn text(&self, selector: &str) -> Option<String> {
        self.texts.get(selector).and_then(|v| v.first()).cloned()
    }

    fn texts(&self, selector: &str) -> Vec<String> {
        self.texts.get(selector).cloned().unwrap_or_default()
    }

    fn attr(&self, selector: &str, name: &str) -> Option<String> {
        self.attrs
            .get(&(selector.to_string(), name.to_string()))
            .cloned()
    }
}
