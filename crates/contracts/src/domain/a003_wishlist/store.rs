use super::aggregate::{WishlistDraft, WishlistItem, WishlistItemId};
use crate::enums::wishlist_sort::WishlistSort;
use crate::shared::storage::{load_list, save_best_effort, StoragePort, WISHLIST_KEY, WISHLIST_SORT_KEY};
use chrono::Utc;
use std::cmp::Ordering;

/// Счётчики для шапки страницы избранного
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WishlistStats {
    pub total: usize,
    pub purchased: usize,
}

/// Избранное поверх порта хранилища: записи в `wishlist`, порядок в `wishlist_sort`
pub struct WishlistStore<S: StoragePort> {
    storage: S,
}

impl<S: StoragePort> WishlistStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Vec<WishlistItem> {
        load_list(&self.storage, WISHLIST_KEY)
    }

    fn save(&self, items: &[WishlistItem]) {
        save_best_effort(&self.storage, WISHLIST_KEY, items);
    }

    /// Новая запись из формы встаёт в начало списка
    pub fn add(&self, draft: WishlistDraft) -> Vec<WishlistItem> {
        let mut items = self.load();
        items.insert(0, WishlistItem::from_draft(draft, Utc::now()));
        self.save(&items);
        items
    }

    pub fn update(&self, id: &WishlistItemId, draft: WishlistDraft) -> Vec<WishlistItem> {
        let mut items = self.load();
        if let Some(item) = items.iter_mut().find(|it| &it.id == id) {
            item.apply(draft);
            self.save(&items);
        }
        items
    }

    pub fn remove(&self, id: &WishlistItemId) -> Vec<WishlistItem> {
        let mut items = self.load();
        items.retain(|it| &it.id != id);
        self.save(&items);
        items
    }

    pub fn toggle_purchased(&self, id: &WishlistItemId) -> Vec<WishlistItem> {
        let mut items = self.load();
        if let Some(item) = items.iter_mut().find(|it| &it.id == id) {
            item.purchased = !item.purchased;
            self.save(&items);
        }
        items
    }

    pub fn clear(&self) {
        self.save(&[]);
    }

    /// Запись со страницы товара: дописывается в конец, если такого id ещё нет
    pub fn save_variant(&self, item: WishlistItem) -> bool {
        let mut items = self.load();
        if items.iter().any(|it| it.id == item.id) {
            return false;
        }
        items.push(item);
        self.save(&items);
        true
    }

    /// Сердечко на карточке: убирает совпадающую запись или добавляет новую в начало.
    /// Возвращает, лежит ли товар в избранном после переключения.
    pub fn toggle_listing(&self, item: WishlistItem) -> bool {
        let mut items = self.load();
        let link = item.link.as_deref();
        match items.iter().position(|it| it.is_listing(&item.title, link)) {
            Some(index) => {
                items.remove(index);
                self.save(&items);
                false
            }
            None => {
                items.insert(0, item);
                self.save(&items);
                true
            }
        }
    }

    pub fn contains_listing(&self, title: &str, link: Option<&str>) -> bool {
        self.load().iter().any(|it| it.is_listing(title, link))
    }

    pub fn stats(&self) -> WishlistStats {
        stats_of(&self.load())
    }

    /// Отфильтрованная и отсортированная копия; сохранённый порядок не меняется
    pub fn visible(&self, term: &str, sort: WishlistSort) -> Vec<WishlistItem> {
        visible_items(&self.load(), term, sort)
    }

    pub fn sort_preference(&self) -> WishlistSort {
        match self.storage.get(WISHLIST_SORT_KEY) {
            Ok(Some(code)) => WishlistSort::from_code_or_default(&code),
            Ok(None) => WishlistSort::default(),
            Err(e) => {
                log::warn!("could not read wishlist sort preference: {}", e);
                WishlistSort::default()
            }
        }
    }

    pub fn save_sort_preference(&self, sort: WishlistSort) {
        if let Err(e) = self.storage.set(WISHLIST_SORT_KEY, sort.code()) {
            log::warn!("could not save wishlist sort preference: {}", e);
        }
    }
}

pub fn stats_of(items: &[WishlistItem]) -> WishlistStats {
    WishlistStats {
        total: items.len(),
        purchased: items.iter().filter(|it| it.purchased).count(),
    }
}

pub fn visible_items(items: &[WishlistItem], term: &str, sort: WishlistSort) -> Vec<WishlistItem> {
    let mut visible: Vec<WishlistItem> = items
        .iter()
        .filter(|it| it.matches_term(term))
        .cloned()
        .collect();
    sort_items(&mut visible, sort);
    visible
}

/// Стабильная сортировка; запись без даты считается самой старой, без цены стоит 0
pub fn sort_items(items: &mut [WishlistItem], sort: WishlistSort) {
    let price = |it: &WishlistItem| it.price.unwrap_or(0.0);
    match sort {
        WishlistSort::Newest => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        WishlistSort::Oldest => items.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        WishlistSort::PriceHigh => {
            items.sort_by(|a, b| price(b).partial_cmp(&price(a)).unwrap_or(Ordering::Equal))
        }
        WishlistSort::PriceLow => {
            items.sort_by(|a, b| price(a).partial_cmp(&price(b)).unwrap_or(Ordering::Equal))
        }
        WishlistSort::Name => items.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title))
        }),
    }
}
