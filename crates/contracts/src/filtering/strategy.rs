//! Упорядоченные стратегии извлечения: каждая возвращает `Option`,
//! побеждает первая успешная.

use super::card::CardSource;

pub type Strategy<'a, T> = &'a dyn Fn(&dyn CardSource) -> Option<T>;

pub fn first_success<T>(card: &dyn CardSource, strategies: &[Strategy<'_, T>]) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy(card))
}

/// Непустой `data-*` атрибут карточки
pub fn data_value(card: &dyn CardSource, key: &str) -> Option<String> {
    card.data(key).filter(|v| !v.trim().is_empty())
}

/// Обрезанный непустой текст первого элемента из списка селекторов
pub fn first_text(card: &dyn CardSource, selectors: &[String]) -> Option<String> {
    selectors.iter().find_map(|selector| {
        card.text(selector)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    })
}

/// Непустой атрибут первого элемента из списка селекторов
pub fn first_attr(card: &dyn CardSource, selectors: &[String], name: &str) -> Option<String> {
    selectors.iter().find_map(|selector| {
        card.attr(selector, name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    })
}
