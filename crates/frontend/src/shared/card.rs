use super::dom::{query, query_all};
use contracts::filtering::{CardSource, ProductKey};
use contracts::shared::text::dataset_attribute;
use web_sys::Element;

/// Карточка товара в DOM листинга
#[derive(Clone)]
pub struct DomCard {
    element: Element,
    index: usize,
}

impl DomCard {
    /// `index` задаёт позиционный ключ для карточек без `data-pid`
    pub fn new(element: Element, index: usize) -> Self {
        Self { element, index }
    }

    pub fn collect(elements: Vec<Element>) -> Vec<Self> {
        elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| Self::new(element, index))
            .collect()
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn product_id(&self) -> Option<String> {
        self.element
            .get_attribute("data-pid")
            .map(|pid| pid.trim().to_string())
            .filter(|pid| !pid.is_empty())
    }
}

impl CardSource for DomCard {
    fn key(&self) -> ProductKey {
        self.product_id()
            .map(ProductKey::new)
            .unwrap_or_else(|| ProductKey::positional(self.index))
    }

    fn data(&self, key: &str) -> Option<String> {
        self.element.get_attribute(&dataset_attribute(key))
    }

    fn text(&self, selector: &str) -> Option<String> {
        query(&self.element, selector).and_then(|el| el.text_content())
    }

    fn texts(&self, selector: &str) -> Vec<String> {
        query_all(&self.element, selector)
            .iter()
            .filter_map(|el| el.text_content())
            .collect()
    }

    fn attr(&self, selector: &str, name: &str) -> Option<String> {
        query(&self.element, selector).and_then(|el| el.get_attribute(name))
    }
}
