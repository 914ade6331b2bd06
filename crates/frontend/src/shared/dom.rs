//! Мелкие помощники над web-sys: поиск элементов, видимость, подписка на события

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, EventTarget, HtmlElement, HtmlInputElement, NodeList};

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

pub fn document_query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

pub fn document_query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub fn input_by_selector(root: &Element, selector: &str) -> Option<HtmlInputElement> {
    query(root, selector).and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
}

/// Показывает элемент (снимает inline `display`) или скрывает его
pub fn set_visible(element: &Element, visible: bool) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let style = html.style();
        if visible {
            let _ = style.remove_property("display");
        } else {
            let _ = style.set_property("display", "none");
        }
    }
}

pub fn is_hidden(element: &Element) -> bool {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value("display").ok())
        .map_or(false, |display| display == "none")
}

/// Вешает обработчик на всё время жизни страницы
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("could not bind {} listener: {:?}", event, e);
    }
    closure.forget();
}

/// Ближайший предок (или сам элемент) события, подходящий под селектор
pub fn closest_from_event(event: &web_sys::Event, selector: &str) -> Option<Element> {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn current_href() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn navigate_to(url: &str) {
    if let Some(win) = window() {
        if let Err(e) = win.location().set_href(url) {
            log::warn!("navigation to {} failed: {:?}", url, e);
        }
    }
}

pub fn page_title() -> String {
    document().map(|d| d.title()).unwrap_or_default()
}
