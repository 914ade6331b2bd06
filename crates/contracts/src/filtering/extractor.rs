//! Извлечение атрибутов карточки для фильтрации.
//!
//! Явная разметка (`data-brand`, `data-price`, ...) приоритетна. Если её нет,
//! значения выводятся из видимого текста: название, alt картинки и бейджи
//! сравниваются со словарём подписей чекбоксов панели фильтров.

use super::card::{CardSource, ProductKey};
use super::facet::Facet;
use super::strategy::{data_value, first_success, Strategy};
use crate::shared::money::{digits_only, first_integer_run, percent_in};
use crate::shared::text::{normalize_text, normalize_whitespace, split_list, unique};
use std::collections::{BTreeMap, HashMap};

const NAME_SELECTOR: &str = ".product-info span";
const IMAGE_SELECTOR: &str = "img";
const BADGE_SELECTOR: &str = ".badge";
const PRICE_SECTION_SELECTOR: &str = ".price-section";
const OLD_PRICE_SELECTOR: &str = ".old-price";

/// Известные подписи значений по заголовкам групп фильтров
#[derive(Debug, Clone, Default)]
pub struct FacetVocabulary {
    groups: HashMap<String, Vec<String>>,
}

impl FacetVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Регистрирует группу; пустые группы не сохраняются
    pub fn add_group<I, S>(&mut self, title: &str, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: Vec<String> = labels
            .into_iter()
            .map(|l| normalize_whitespace(l.as_ref()))
            .filter(|l| !l.is_empty())
            .collect();
        if labels.is_empty() {
            return;
        }
        self.groups
            .entry(normalize_whitespace(title))
            .or_default()
            .extend(labels);
    }

    pub fn labels(&self, title: &str) -> &[String] {
        self.groups.get(title).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Атрибуты одной карточки
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductFacets {
    pub name_text: String,
    pub alt_text: String,
    pub values: BTreeMap<Facet, Vec<String>>,
    pub price: Option<u64>,
    pub old_price: Option<u64>,
    pub discount_percent: Option<u64>,
    pub promotion_percent: Option<u64>,
}

impl ProductFacets {
    pub fn values_of(&self, facet: Facet) -> &[String] {
        self.values.get(&facet).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Экстрактор с явным кэшем по ключу карточки
#[derive(Debug, Default)]
pub struct FacetExtractor {
    vocabulary: FacetVocabulary,
    cache: HashMap<ProductKey, ProductFacets>,
}

impl FacetExtractor {
    pub fn new(vocabulary: FacetVocabulary) -> Self {
        Self {
            vocabulary,
            cache: HashMap::new(),
        }
    }

    pub fn vocabulary(&self) -> &FacetVocabulary {
        &self.vocabulary
    }

    /// Атрибуты карточки; вычисляются один раз на ключ
    pub fn facets(&mut self, card: &dyn CardSource) -> &ProductFacets {
        let vocabulary = &self.vocabulary;
        self.cache
            .entry(card.key())
            .or_insert_with(|| extract_facets(card, vocabulary))
    }

    pub fn invalidate(&mut self, key: &ProductKey) {
        self.cache.remove(key);
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

/// Вычисляет атрибуты карточки без кэша
pub fn extract_facets(card: &dyn CardSource, vocabulary: &FacetVocabulary) -> ProductFacets {
    let name_text = card
        .text(NAME_SELECTOR)
        .map(|t| t.trim().to_string())
        .unwrap_or_default();
    let alt_text = card
        .attr(IMAGE_SELECTOR, "alt")
        .map(|t| t.trim().to_string())
        .unwrap_or_default();
    let badges = badge_texts(card).join(" ");
    let big_text = normalize_text(&[name_text.as_str(), alt_text.as_str(), badges.as_str()].join(" "));

    let values = Facet::dimensions()
        .into_iter()
        .map(|facet| (facet, read_dimension(card, facet, vocabulary, &big_text)))
        .collect();

    let price = read_price(card);
    let old_price = read_old_price(card);

    ProductFacets {
        discount_percent: read_discount_percent(card, price, old_price),
        promotion_percent: read_promotion_percent(card),
        name_text,
        alt_text,
        values,
        price,
        old_price,
    }
}

fn badge_texts(card: &dyn CardSource) -> Vec<String> {
    card.texts(BADGE_SELECTOR)
        .into_iter()
        .map(|b| b.trim().to_string())
        .collect()
}

fn read_dimension(
    card: &dyn CardSource,
    facet: Facet,
    vocabulary: &FacetVocabulary,
    big_text: &str,
) -> Vec<String> {
    if let Some(explicit) = data_value(card, facet.dataset_key()) {
        return split_list(&explicit);
    }
    let matches = vocabulary
        .labels(facet.title())
        .iter()
        .filter(|label| big_text.contains(&normalize_text(label)))
        .cloned()
        .collect();
    unique(matches)
}

fn explicit_number(card: &dyn CardSource, key: &str) -> Option<u64> {
    data_value(card, key).and_then(|v| digits_only(&v))
}

fn read_price(card: &dyn CardSource) -> Option<u64> {
    let explicit = |c: &dyn CardSource| explicit_number(c, "price");
    let from_section = |c: &dyn CardSource| {
        c.text(PRICE_SECTION_SELECTOR)
            .and_then(|t| first_integer_run(&t))
    };
    let strategies: [Strategy<'_, u64>; 2] = [&explicit, &from_section];
    first_success(card, &strategies)
}

fn read_old_price(card: &dyn CardSource) -> Option<u64> {
    let explicit = |c: &dyn CardSource| explicit_number(c, "oldPrice");
    let from_label = |c: &dyn CardSource| {
        c.text(OLD_PRICE_SELECTOR)
            .and_then(|t| first_integer_run(&t))
    };
    let strategies: [Strategy<'_, u64>; 2] = [&explicit, &from_label];
    first_success(card, &strategies)
}

fn read_discount_percent(
    card: &dyn CardSource,
    price: Option<u64>,
    old_price: Option<u64>,
) -> Option<u64> {
    let explicit = |c: &dyn CardSource| explicit_number(c, "discountPercent");
    let from_badge = |c: &dyn CardSource| {
        badge_texts(c)
            .into_iter()
            .find(|b| b.contains('%'))
            .and_then(|b| percent_in(&b))
    };
    let computed = |_: &dyn CardSource| match (price, old_price) {
        (Some(p), Some(o)) if o > p => {
            Some((((o - p) as f64 / o as f64) * 100.0).round() as u64)
        }
        _ => None,
    };
    let strategies: [Strategy<'_, u64>; 3] = [&explicit, &from_badge, &computed];
    first_success(card, &strategies)
}

fn read_promotion_percent(card: &dyn CardSource) -> Option<u64> {
    let explicit = |c: &dyn CardSource| explicit_number(c, "promotionPercent");
    let from_badge = |c: &dyn CardSource| {
        badge_texts(c)
            .into_iter()
            .find(|b| b.to_lowercase().contains("extra"))
            .and_then(|b| percent_in(&b))
    };
    let strategies: [Strategy<'_, u64>; 2] = [&explicit, &from_badge];
    first_success(card, &strategies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::card::StaticCard;

    fn vocabulary() -> FacetVocabulary {
        let mut v = FacetVocabulary::new();
        v.add_group("Color", ["Red", "Blue", "Green"]);
        v.add_group("Fabric", ["Silk", "Cotton"]);
        v.add_group("Brand", ["Crème Royale"]);
        v
    }

    #[test]
    fn test_explicit_data_bypasses_inference() {
        let card = StaticCard::new("p1")
            .with_data("color", " Maroon , Gold ")
            .with_text(".product-info span", "Red Silk Saree");
        let facets = extract_facets(&card, &vocabulary());
        assert_eq!(facets.values_of(Facet::Color), ["Maroon", "Gold"]);
        assert_eq!(facets.values_of(Facet::Fabric), ["Silk"]);
    }

    #[test]
    fn test_inference_keeps_all_matches_and_normalizes() {
        let card = StaticCard::new("p1")
            .with_text(".product-info span", "RED and   blue Saree")
            .with_attr("img", "alt", "creme royale silk")
            .with_text(".badge", "New");
        let facets = extract_facets(&card, &vocabulary());
        assert_eq!(facets.values_of(Facet::Color), ["Red", "Blue"]);
        assert_eq!(facets.values_of(Facet::Brand), ["Crème Royale"]);
        assert_eq!(facets.values_of(Facet::Fabric), ["Silk"]);
        assert!(facets.values_of(Facet::Size).is_empty());
        assert_eq!(facets.name_text, "RED and   blue Saree");
        assert_eq!(facets.alt_text, "creme royale silk");
    }

    #[test]
    fn test_price_explicit_then_section() {
        let explicit = StaticCard::new("a")
            .with_data("price", "₹799")
            .with_text(".price-section", "₹1,169");
        assert_eq!(extract_facets(&explicit, &vocabulary()).price, Some(799));

        let from_text = StaticCard::new("b").with_text(".price-section", "₹1,169 ₹1,299");
        assert_eq!(extract_facets(&from_text, &vocabulary()).price, Some(1169));

        let unknown = StaticCard::new("c").with_text(".price-section", "Price on request");
        assert_eq!(extract_facets(&unknown, &vocabulary()).price, None);
    }

    #[test]
    fn test_discount_from_badge() {
        let card = StaticCard::new("a")
            .with_text(".badge", "Bestseller")
            .with_text(".badge", "50% OFF");
        assert_eq!(extract_facets(&card, &vocabulary()).discount_percent, Some(50));
    }

    #[test]
    fn test_discount_computed_from_prices() {
        let card = StaticCard::new("a")
            .with_text(".price-section", "₹1,169")
            .with_text(".old-price", "₹1,299");
        let facets = extract_facets(&card, &vocabulary());
        assert_eq!(facets.old_price, Some(1299));
        assert_eq!(facets.discount_percent, Some(10));
    }

    #[test]
    fn test_discount_unknown_when_old_not_higher() {
        let card = StaticCard::new("a")
            .with_text(".price-section", "₹1,299")
            .with_text(".old-price", "₹1,299");
        assert_eq!(extract_facets(&card, &vocabulary()).discount_percent, None);
    }

    #[test]
    fn test_promotion_from_extra_badge() {
        let card = StaticCard::new("a")
            .with_text(".badge", "40% OFF")
            .with_text(".badge", "EXTRA 15% off");
        let facets = extract_facets(&card, &vocabulary());
        assert_eq!(facets.promotion_percent, Some(15));
        assert_eq!(facets.discount_percent, Some(40));
    }

    #[test]
    fn test_promotion_missing_is_none() {
        let card = StaticCard::new("a").with_text(".badge", "Extra cosy");
        assert_eq!(extract_facets(&card, &vocabulary()).promotion_percent, None);
    }

    #[test]
    fn test_cache_memoizes_and_invalidates() {
        let mut extractor = FacetExtractor::new(vocabulary());
        let card = StaticCard::new("p1").with_text(".product-info span", "Red Saree");
        assert_eq!(extractor.facets(&card).values_of(Facet::Color), ["Red"]);

        // Кэш не видит изменений разметки до явной инвалидации
        let changed = StaticCard::new("p1").with_text(".product-info span", "Blue Saree");
        assert_eq!(extractor.facets(&changed).values_of(Facet::Color), ["Red"]);
        assert_eq!(extractor.cached_len(), 1);

        extractor.invalidate(&ProductKey::new("p1"));
        assert_eq!(extractor.facets(&changed).values_of(Facet::Color), ["Blue"]);

        extractor.clear();
        assert_eq!(extractor.cached_len(), 0);
    }
}
