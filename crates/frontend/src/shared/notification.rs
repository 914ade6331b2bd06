use super::dom::{document, document_query_all};
use super::timers::after;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const NOTIFICATION_CLASS: &str = "wishlist-notification";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotificationKind {
    Added,
    Removed,
}

impl NotificationKind {
    fn background(&self) -> &'static str {
        match self {
            NotificationKind::Added => "#27ae60",
            NotificationKind::Removed => "#e74c3c",
        }
    }
}

/// Всплывающее сообщение в правом верхнем углу; предыдущее убирается
pub fn show_notification(message: &str, kind: NotificationKind, duration_ms: u32) {
    let Some(document) = document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    for previous in document_query_all(&format!(".{}", NOTIFICATION_CLASS)) {
        previous.remove();
    }

    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name(NOTIFICATION_CLASS);
    toast.set_text_content(Some(message));
    let _ = toast.set_attribute("role", "status");
    let _ = toast.set_attribute(
        "style",
        &format!(
            "position:fixed;top:20px;right:20px;background:{};color:white;\
             padding:12px 20px;border-radius:25px;font-size:14px;font-weight:600;\
             z-index:10000;box-shadow:0 4px 15px rgba(0,0,0,0.2);\
             transition:transform 0.3s ease;max-width:300px;word-wrap:break-word",
            kind.background()
        ),
    );
    if body.append_child(&toast).is_err() {
        return;
    }

    after(duration_ms, move || {
        if let Some(html) = toast.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("transform", "translateX(100%)");
        }
        after(300, move || toast.remove());
    });
}
