use super::snapshot::ProductSnapshot;
use crate::domain::a001_catalog::{CatalogProduct, ProductVariants};
use crate::domain::a002_cart::{CartItem, CartItemId, CartStore};
use crate::domain::a003_wishlist::{WishlistItem, WishlistItemId, WishlistStore};
use crate::domain::common::SizeVariant;
use crate::shared::error::ValidationError;
use crate::shared::storage::StoragePort;
use chrono::Utc;

/// Товар по умолчанию, когда в адресе нет `?id=`
pub const DEFAULT_PRODUCT_ID: &str = "p1";

/// Товар для страницы: запись каталога, поверх неё снимок из сессии.
/// Если нет ни того, ни другого, возвращается заглушка без остатков.
pub fn resolve_product(
    product_id: &str,
    catalog: Option<&CatalogProduct>,
    snapshot: Option<ProductSnapshot>,
) -> CatalogProduct {
    if catalog.is_none() && snapshot.is_none() {
        log::debug!("product {} not found, showing placeholder", product_id);
        return CatalogProduct::placeholder(product_id);
    }

    let mut product = catalog.cloned().unwrap_or_else(|| CatalogProduct {
        id: product_id.to_string(),
        title: String::new(),
        price: 0.0,
        old_price: None,
        image: String::new(),
        description: String::new(),
        rating: None,
        variants: None,
        reviews: Vec::new(),
    });
    if let Some(snapshot) = snapshot {
        snapshot.overlay(&mut product);
    }

    if product.id.is_empty() {
        product.id = product_id.to_string();
    }
    if product.title.trim().is_empty() {
        product.title = format!("Product {}", product_id);
    }
    if product.variants.is_none() {
        product.variants = Some(ProductVariants::standard());
    }
    product
}

/// Состояние страницы товара: выбранный размер и локальные остатки
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    product: CatalogProduct,
    selected_size: Option<String>,
}

impl ProductDetail {
    /// Первый размер выбран сразу
    pub fn new(product: CatalogProduct) -> Self {
        let selected_size = product.sizes().into_iter().next();
        Self {
            product,
            selected_size,
        }
    }

    pub fn product(&self) -> &CatalogProduct {
        &self.product
    }

    pub fn sizes(&self) -> Vec<String> {
        self.product.sizes()
    }

    pub fn selected_size(&self) -> Option<&str> {
        self.selected_size.as_deref()
    }

    pub fn select_size(&mut self, size: &str) {
        if self.sizes().iter().any(|s| s == size) {
            self.selected_size = Some(size.to_string());
        }
    }

    /// Размер для операций: выбранный, иначе первый, иначе "S"
    fn chosen_size(&self) -> String {
        self.selected_size
            .clone()
            .or_else(|| self.sizes().into_iter().next())
            .unwrap_or_else(|| "S".to_string())
    }

    pub fn stock(&self) -> u32 {
        self.product.stock_of(&self.chosen_size())
    }

    /// Строка остатка; при нуле не показывается
    pub fn stock_label(&self) -> Option<String> {
        let stock = self.stock();
        (stock > 0).then(|| format!("In stock: {}", stock))
    }

    pub fn can_add_to_cart(&self) -> bool {
        self.stock() > 0
    }

    /// Кладёт выбранный размер в корзину и уменьшает локальный остаток.
    /// Возвращает итоговое количество этой позиции в корзине.
    pub fn add_to_cart<S: StoragePort>(&mut self, cart: &CartStore<S>) -> Result<u32, ValidationError> {
        let size = self.chosen_size();
        if self.product.stock_of(&size) == 0 {
            return Err(ValidationError::OutOfStock);
        }

        let id = CartItemId::for_variant(&self.product.id, &size);
        let items = cart.add(CartItem {
            id: id.clone(),
            name: self.product.title.clone(),
            price: self.product.price,
            image: self.product.image.clone(),
            quantity: 1,
            variant: Some(SizeVariant::new(size.clone())),
        });
        if let Some(variants) = self.product.variants.as_mut() {
            variants.take_one(&size);
        }
        Ok(items
            .iter()
            .find(|it| it.id == id)
            .map_or(1, |it| it.quantity))
    }

    /// Сохраняет выбранный размер в избранное; `false`, если уже сохранён
    pub fn save_to_wishlist<S: StoragePort>(&self, wishlist: &WishlistStore<S>) -> bool {
        let size = self.chosen_size();
        wishlist.save_variant(WishlistItem {
            id: WishlistItemId::for_variant(&self.product.id, &size),
            title: self.product.title.clone(),
            link: None,
            price: Some(self.product.price),
            image: self.product.image.clone(),
            image_alt: None,
            note: None,
            purchased: false,
            created_at: Some(Utc::now()),
            variant: Some(SizeVariant::new(size)),
        })
    }
}
