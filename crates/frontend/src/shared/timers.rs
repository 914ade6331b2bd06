use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;

/// Отложенный вызов: каждый новый `schedule` отменяет ожидающий
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn schedule(&self, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, callback);
        if let Some(previous) = self.pending.borrow_mut().replace(timeout) {
            previous.cancel();
        }
    }
}

/// Однократный вызов через `ms` миллисекунд
pub fn after(ms: u32, callback: impl FnOnce() + 'static) {
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(ms).await;
        callback();
    });
}
