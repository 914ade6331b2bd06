use super::aggregate::{CartItem, CartItemId};
use crate::shared::storage::{load_list, save_best_effort, StoragePort, CART_ITEMS_KEY};

/// Корзина поверх порта хранилища.
///
/// Каждая операция читает список заново, меняет его и записывает обратно,
/// возвращая итоговое состояние.
pub struct CartStore<S: StoragePort> {
    storage: S,
}

impl<S: StoragePort> CartStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Vec<CartItem> {
        load_list(&self.storage, CART_ITEMS_KEY)
    }

    fn save(&self, items: &[CartItem]) {
        save_best_effort(&self.storage, CART_ITEMS_KEY, items);
    }

    /// Добавляет позицию; при совпадении id количество суммируется
    pub fn add(&self, item: CartItem) -> Vec<CartItem> {
        let mut items = self.load();
        match items.iter_mut().find(|it| it.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => items.push(item),
        }
        self.save(&items);
        items
    }

    /// Новое количество; 0 удаляет позицию, неизвестный id ничего не меняет
    pub fn update_quantity(&self, id: &CartItemId, quantity: u32) -> Vec<CartItem> {
        let mut items = self.load();
        let Some(index) = items.iter().position(|it| &it.id == id) else {
            return items;
        };
        if quantity == 0 {
            items.remove(index);
        } else {
            items[index].quantity = quantity;
        }
        self.save(&items);
        items
    }

    pub fn remove(&self, id: &CartItemId) -> Vec<CartItem> {
        let mut items = self.load();
        items.retain(|it| &it.id != id);
        self.save(&items);
        items
    }

    pub fn clear(&self) {
        self.save(&[]);
    }

    pub fn quantity_of(&self, id: &CartItemId) -> u32 {
        self.load()
            .iter()
            .find(|it| &it.id == id)
            .map_or(0, |it| it.quantity)
    }
}

/// Сумма корзины: цена × количество по всем позициям
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::SizeVariant;
    use crate::shared::storage::MemoryStorage;

    fn item(name: &str, price: f64) -> CartItem {
        CartItem {
            id: CartItemId::for_listing(name, ""),
            name: name.to_string(),
            price,
            image: String::new(),
            quantity: 1,
            variant: None,
        }
    }

    #[test]
    fn test_add_same_item_twice_accumulates() {
        let storage = MemoryStorage::new();
        let cart = CartStore::new(&storage);
        cart.add(item("Saree", 799.0));
        let items = cart.add(item("Saree", 799.0));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(cart.quantity_of(&items[0].id), 2);
    }

    #[test]
    fn test_update_to_zero_removes() {
        let storage = MemoryStorage::new();
        let cart = CartStore::new(&storage);
        let id = cart.add(item("Saree", 799.0))[0].id.clone();
        cart.add(item("Kurta", 499.0));

        let items = cart.update_quantity(&id, 0);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Kurta");
        assert_eq!(cart.load(), items);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let storage = MemoryStorage::new();
        let cart = CartStore::new(&storage);
        cart.add(item("Saree", 799.0));
        let items = cart.update_quantity(&CartItemId("missing".to_string()), 3);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let storage = MemoryStorage::new();
        let cart = CartStore::new(&storage);
        let id = cart.add(item("Saree", 799.0))[0].id.clone();
        cart.add(item("Kurta", 499.0));
        assert_eq!(cart.remove(&id).len(), 1);
        cart.clear();
        assert!(cart.load().is_empty());
    }

    #[test]
    fn test_total() {
        let mut a = item("Saree", 799.0);
        a.quantity = 2;
        let b = item("Kurta", 499.5);
        assert_eq!(cart_total(&[a, b]), 2097.5);
        assert_eq!(cart_total(&[]), 0.0);
    }

    #[test]
    fn test_variant_items_are_separate_lines() {
        let storage = MemoryStorage::new();
        let cart = CartStore::new(&storage);
        for size in ["M", "L", "M"] {
            cart.add(CartItem {
                id: CartItemId::for_variant("p2", size),
                name: "Kanjivaram Saree".to_string(),
                price: 799.0,
                image: String::new(),
                quantity: 1,
                variant: Some(SizeVariant::new(size)),
            });
        }
        let items = cart.load();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].variant, Some(SizeVariant::new("L")));
    }

    #[test]
    fn test_quantity_saturates_instead_of_wrapping() {
        let storage = MemoryStorage::new();
        let cart = CartStore::new(&storage);
        let mut big = item("Saree", 799.0);
        big.quantity = u32::MAX;
        cart.add(big);
        let items = cart.add(item("Saree", 799.0));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, u32::MAX);
    }

    #[test]
    fn test_unreadable_entry_does_not_wipe_cart() {
        let storage = MemoryStorage::new();
        storage
            .set(
                CART_ITEMS_KEY,
                r#"[{"id":"a|","name":"A","price":10,"image":"","quantity":2},
                    {"id":"b|"},
                    {"id":"c|","price":5,"quantity":1}]"#,
            )
            .unwrap();
        let cart = CartStore::new(&storage);
        assert_eq!(cart.load().len(), 1);

        let items = cart.add(item("New", 20.0));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "A");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(cart.load(), items);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_result() {
        let storage = MemoryStorage::new();
        storage.fail_writes(true);
        let cart = CartStore::new(&storage);
        let items = cart.add(item("Saree", 799.0));
        assert_eq!(items.len(), 1);
        assert!(cart.load().is_empty());
    }
}
