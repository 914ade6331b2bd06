//! Поиск по карточкам страницы с объявлением результата в aria-live области

use crate::shared::card::DomCard;
use crate::shared::dom::{document, document_query, document_query_all, element_by_id, is_hidden, listen, set_visible};
use crate::shared::timers::Debouncer;
use crate::usecases::u101_filter_listing::panel::SEARCH_INPUT_SELECTOR;
use contracts::filtering::search::searchable_text;
use contracts::filtering::{CardSource, PageSearchIndex};
use contracts::shared::config::StorefrontConfig;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, KeyboardEvent};

const LIVE_REGION_ID: &str = "search-results-live";

struct PageSearch {
    input: HtmlInputElement,
    cards: Vec<DomCard>,
    index: PageSearchIndex,
    live: Option<Element>,
}

impl PageSearch {
    fn run(&self) {
        let outcome = self.index.run(&self.input.value());
        for (card, visible) in self.cards.iter().zip(&outcome.visible) {
            set_visible(card.element(), *visible);
        }
        if let Some(live) = &self.live {
            live.set_text_content(Some(&outcome.announcement));
        }
    }

    fn focus_first_visible(&self) {
        if let Some(html) = self
            .cards
            .iter()
            .find(|c| !is_hidden(c.element()))
            .and_then(|c| c.element().dyn_ref::<HtmlElement>())
        {
            let _ = html.focus();
        }
    }
}

/// Скрытая визуально, но доступная скринридерам область объявлений
fn live_region() -> Option<Element> {
    if let Some(existing) = element_by_id(LIVE_REGION_ID) {
        return Some(existing);
    }
    let document = document()?;
    let live = document.create_element("div").ok()?;
    live.set_id(LIVE_REGION_ID);
    let _ = live.set_attribute("aria-live", "polite");
    let _ = live.set_attribute("aria-atomic", "true");
    let _ = live.set_attribute(
        "style",
        "position:absolute;left:-9999px;width:1px;height:1px;overflow:hidden",
    );
    document.body()?.append_child(&live).ok()?;
    Some(live)
}

pub fn bind(config: &StorefrontConfig) {
    let Some(input) = document_query(SEARCH_INPUT_SELECTOR)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let cards = DomCard::collect(document_query_all(".product-card"));
    if cards.is_empty() {
        log::debug!("page search: no product cards");
        return;
    }

    for card in &cards {
        let _ = card
            .element()
            .set_attribute("data-search", &searchable_text(card));
        if let Some(title) = card.text(".product-info span") {
            let _ = card.element().set_attribute("data-title", &title);
        }
    }
    let index = PageSearchIndex::build(cards.iter().map(|c| c as &dyn CardSource));
    let search = Rc::new(PageSearch {
        input,
        cards,
        index,
        live: live_region(),
    });

    let input = search.input.clone();
    let debouncer = Debouncer::new(config.timings.search_debounce_ms);
    {
        let search = search.clone();
        listen(&input, "input", move |_| {
            let search = search.clone();
            debouncer.schedule(move || search.run());
        });
    }
    {
        let search = search.clone();
        listen(&input, "search", move |_| search.run());
    }
    {
        let search = search.clone();
        listen(&input, "keydown", move |ev| {
            let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(|k| k.key()) else {
                return;
            };
            match key.as_str() {
                "Enter" => {
                    search.run();
                    search.focus_first_visible();
                }
                "Escape" => {
                    search.input.set_value("");
                    search.run();
                }
                _ => {}
            }
        });
    }

    search.run();
}
