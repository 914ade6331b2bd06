use crate::shared::dom::{input_by_selector, query, query_all, document_query};
use contracts::filtering::{FacetVocabulary, FilterSelection, PriceRange};
use contracts::shared::text::normalize_whitespace;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

pub const SEARCH_INPUT_SELECTOR: &str = ".search-bar input[type=\"search\"]";

/// Чекбокс значения фильтра с заголовком группы и подписью
pub struct FilterOption {
    pub input: HtmlInputElement,
    pub group: String,
    pub label: String,
}

/// Элементы управления боковой панели фильтров
pub struct FilterPanel {
    pub options: Vec<FilterOption>,
    pub price_min: Option<HtmlInputElement>,
    pub price_max: Option<HtmlInputElement>,
    pub price_single: Option<HtmlInputElement>,
    pub search: Option<HtmlInputElement>,
}

impl FilterPanel {
    /// Считывает панель и словарь подписей по группам
    pub fn read(sidebar: &Element) -> (Self, FacetVocabulary) {
        let mut vocabulary = FacetVocabulary::new();
        let mut options = Vec::new();

        for group in query_all(sidebar, ".filter-group") {
            let Some(title) = query(&group, ".filter-title")
                .and_then(|t| t.text_content())
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
            else {
                continue;
            };

            let mut labels = Vec::new();
            for option in query_all(&group, ".filter-option") {
                let Some(input) = input_by_selector(&option, "input[type=\"checkbox\"]") else {
                    continue;
                };
                let label = normalize_whitespace(&option.text_content().unwrap_or_default());
                labels.push(label.clone());
                options.push(FilterOption {
                    input,
                    group: title.clone(),
                    label,
                });
            }
            vocabulary.add_group(&title, labels);
        }

        let price_single = input_by_selector(sidebar, "#price-range")
            .or_else(|| input_by_selector(sidebar, ".price-slider input[type=\"range\"]"));
        let search = document_query(SEARCH_INPUT_SELECTOR)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

        let panel = Self {
            options,
            price_min: input_by_selector(sidebar, "#price-min"),
            price_max: input_by_selector(sidebar, "#price-max"),
            price_single,
            search,
        };
        (panel, vocabulary)
    }

    /// Текущее состояние элементов управления
    pub fn selection(&self) -> FilterSelection {
        let value = |input: &Option<HtmlInputElement>| input.as_ref().map(|i| i.value());
        let (min, max, single) = (
            value(&self.price_min),
            value(&self.price_max),
            value(&self.price_single),
        );

        let mut selection = FilterSelection::new().with_price(PriceRange::from_controls(
            min.as_deref(),
            max.as_deref(),
            single.as_deref(),
        ));
        for option in self.options.iter().filter(|o| o.input.checked()) {
            selection.select(&option.group, &option.label);
        }
        match &self.search {
            Some(search) => selection.with_query(&search.value()),
            None => selection,
        }
    }
}
