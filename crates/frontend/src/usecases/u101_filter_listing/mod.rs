//! Панель фильтров листинга: чекбоксы, цена и поиск скрывают неподходящие карточки

pub mod panel;

use self::panel::FilterPanel;
use crate::shared::card::DomCard;
use crate::shared::dom::{document_query, listen, query_all, set_visible};
use crate::shared::timers::Debouncer;
use contracts::filtering::{matches, FacetExtractor};
use contracts::shared::config::StorefrontConfig;
use std::cell::RefCell;
use std::rc::Rc;

struct ListingFilter {
    panel: FilterPanel,
    cards: Vec<DomCard>,
    extractor: RefCell<FacetExtractor>,
}

impl ListingFilter {
    fn apply(&self) {
        let selection = self.panel.selection();
        let mut extractor = self.extractor.borrow_mut();
        let mut shown = 0;
        for card in &self.cards {
            let visible = matches(extractor.facets(card), &selection);
            set_visible(card.element(), visible);
            shown += usize::from(visible);
        }
        log::debug!("filters applied: {} of {} cards shown", shown, self.cards.len());
    }
}

pub fn bind(config: &StorefrontConfig) {
    let (Some(sidebar), Some(grid)) = (
        document_query("aside.filters"),
        document_query("section.products"),
    ) else {
        log::debug!("no filter sidebar or product grid on this page");
        return;
    };
    let cards = DomCard::collect(query_all(&grid, ".product-card"));
    if cards.is_empty() {
        log::debug!("product grid has no cards, filters not bound");
        return;
    }

    let (panel, vocabulary) = FilterPanel::read(&sidebar);
    let filter = Rc::new(ListingFilter {
        panel,
        cards,
        extractor: RefCell::new(FacetExtractor::new(vocabulary)),
    });

    for option in &filter.panel.options {
        let filter = filter.clone();
        listen(&option.input, "change", move |_| filter.apply());
    }
    let price_inputs = [
        &filter.panel.price_min,
        &filter.panel.price_max,
        &filter.panel.price_single,
    ];
    for input in price_inputs.into_iter().flatten() {
        let filter = filter.clone();
        listen(input, "input", move |_| filter.apply());
    }
    if let Some(search) = &filter.panel.search {
        let debouncer = Debouncer::new(config.timings.filter_debounce_ms);
        let filter = filter.clone();
        listen(search, "input", move |_| {
            let filter = filter.clone();
            debouncer.schedule(move || filter.apply());
        });
    }

    filter.apply();
}
