//! Предикат видимости карточки.
//!
//! И между группами, ИЛИ внутри группы. Неизвестная цена не отсекается
//! ценовым диапазоном. Промо и скидка: пороговые группы, карточка проходит,
//! если её процент не ниже минимального из отмеченных порогов.

use super::extractor::ProductFacets;
use super::facet::Facet;
use super::selection::FilterSelection;
use crate::shared::money::first_integer;
use crate::shared::text::normalize_text;
use std::collections::BTreeSet;

pub fn matches(record: &ProductFacets, selection: &FilterSelection) -> bool {
    if let Some(price) = record.price {
        if selection.price.is_active() && !selection.price.contains(price as f64) {
            return false;
        }
    }

    if !selection.query.is_empty() {
        let hay = normalize_text(&format!("{} {}", record.name_text, record.alt_text));
        if !hay.contains(&selection.query) {
            return false;
        }
    }

    for (group, selected) in &selection.active {
        if selected.is_empty() {
            continue;
        }
        let facet = Facet::from_title(group);
        let passes = match facet {
            Some(Facet::Promotions) => match_percent(record.promotion_percent, selected),
            Some(Facet::Discount) => match_percent(record.discount_percent, selected),
            Some(facet) => match_values(record.values_of(facet), selected),
            // Группа без известного атрибута: значений у карточки нет
            None => false,
        };
        if !passes {
            return false;
        }
    }

    true
}

/// Пороговое сравнение: отмеченные подписи ("Extra 10%") дают минимальный порог
pub fn match_percent(percent: Option<u64>, selected: &BTreeSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    let Some(percent) = percent else {
        return false;
    };
    match selected.iter().filter_map(|label| first_integer(label)).min() {
        Some(required) => percent >= required,
        None => true,
    }
}

fn match_values(values: &[String], selected: &BTreeSet<String>) -> bool {
    if values.is_empty() {
        return false;
    }
    let selected: Vec<String> = selected.iter().map(|v| normalize_text(v)).collect();
    values
        .iter()
        .any(|v| selected.contains(&normalize_text(v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::selection::PriceRange;

    fn card(price: Option<u64>, colors: &[&str]) -> ProductFacets {
        let mut record = ProductFacets {
            name_text: "Banarasi Saree".to_string(),
            price,
            ..ProductFacets::default()
        };
        record
            .values
            .insert(Facet::Color, colors.iter().map(|c| c.to_string()).collect());
        record
    }

    #[test]
    fn test_set_membership_is_or_within_group() {
        let selection = FilterSelection::new()
            .with_value("Color", "Red")
            .with_value("Color", "Green");
        assert!(matches(&card(None, &["green"]), &selection));
        assert!(!matches(&card(None, &["Blue"]), &selection));
        assert!(!matches(&card(None, &[]), &selection));
    }

    #[test]
    fn test_groups_are_and() {
        let mut record = card(None, &["Red"]);
        record.values.insert(Facet::Fabric, vec!["Cotton".to_string()]);
        let selection = FilterSelection::new()
            .with_value("Color", "Red")
            .with_value("Fabric", "Silk");
        assert!(!matches(&record, &selection));
    }

    #[test]
    fn test_unknown_group_with_selection_hides() {
        let selection = FilterSelection::new().with_value("Occasion", "Wedding");
        assert!(!matches(&card(Some(500), &["Red"]), &selection));
    }

    #[test]
    fn test_price_bounds() {
        let selection = FilterSelection::new().with_price(PriceRange::between(500.0, 1000.0));
        assert!(matches(&card(Some(799), &[]), &selection));
        assert!(!matches(&card(Some(1169), &[]), &selection));
        assert!(matches(&card(None, &[]), &selection));
    }

    #[test]
    fn test_match_percent_minimum_threshold() {
        let selected: BTreeSet<String> = ["10%", "20%"].iter().map(|s| s.to_string()).collect();
        assert!(match_percent(Some(15), &selected));
        assert!(!match_percent(Some(5), &selected));
        assert!(!match_percent(None, &selected));
    }

    #[test]
    fn test_match_percent_labels_without_numbers_pass() {
        let selected: BTreeSet<String> = ["Any offer".to_string()].into_iter().collect();
        assert!(match_percent(Some(1), &selected));
    }

    #[test]
    fn test_promotions_group() {
        let mut record = card(None, &[]);
        record.promotion_percent = Some(10);
        let selection = FilterSelection::new().with_value("Promotions", "Extra 10%");
        assert!(matches(&record, &selection));
        record.promotion_percent = None;
        assert!(!matches(&record, &selection));
    }

    #[test]
    fn test_query_uses_name_and_alt() {
        let mut record = card(None, &[]);
        record.alt_text = "handloom silk".to_string();
        assert!(matches(&record, &FilterSelection::new().with_query("saree")));
        assert!(matches(&record, &FilterSelection::new().with_query("Saree handloom")));
        assert!(!matches(&record, &FilterSelection::new().with_query("kurta")));
    }
}
