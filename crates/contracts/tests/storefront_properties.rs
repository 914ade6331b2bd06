//! Сквозные сценарии витрины поверх хранилища в памяти

use contracts::domain::a001_catalog::Catalog;
use contracts::domain::a002_cart::{cart_total, CartDraft, CartItem, CartStore};
use contracts::domain::a003_wishlist::{WishlistDraft, WishlistStore};
use contracts::domain::a005_product_detail::{
    load_snapshot, resolve_product, save_snapshot, ProductDetail, ProductSnapshot,
};
use contracts::enums::wishlist_sort::WishlistSort;
use contracts::filtering::{
    extract_facets, matches, FacetExtractor, FacetVocabulary, FilterSelection, PageSearchIndex,
    PriceRange, StaticCard,
};
use contracts::shared::config::Selectors;
use contracts::shared::money::format_currency;
use contracts::shared::{MemoryStorage, StoragePort, ValidationError};

fn vocabulary() -> FacetVocabulary {
    let mut vocabulary = FacetVocabulary::new();
    vocabulary.add_group("Color", ["Red", "Blue", "Green"]);
    vocabulary.add_group("Discount", ["10% and above", "20% and above"]);
    vocabulary
}

fn listing_card(pid: &str, name: &str, price_text: &str) -> StaticCard {
    StaticCard::new(pid)
        .with_text(".product-info span", name)
        .with_text(".price-section", price_text)
        .with_attr("img", "alt", name)
}

#[test]
fn color_filter_hides_other_colors() {
    let vocabulary = vocabulary();
    let blue = listing_card("p1", "Blue Cotton Kurta", "₹799");
    let red = listing_card("p2", "Red Banarasi Saree", "₹899");
    let selection = FilterSelection::new().with_value("Color", "Red");

    assert!(!matches(&extract_facets(&blue, &vocabulary), &selection));
    assert!(matches(&extract_facets(&red, &vocabulary), &selection));
}

#[test]
fn price_range_is_inclusive_and_ignores_unknown_price() {
    let vocabulary = vocabulary();
    let selection = FilterSelection::new().with_price(PriceRange::between(500.0, 1000.0));

    let cheap = listing_card("a", "Saree", "₹799");
    let dear = listing_card("b", "Saree", "₹1,169 ₹1,299");
    let edge = listing_card("c", "Saree", "₹1,000");
    let unknown = StaticCard::new("d").with_text(".product-info span", "Saree");

    assert!(matches(&extract_facets(&cheap, &vocabulary), &selection));
    assert!(!matches(&extract_facets(&dear, &vocabulary), &selection));
    assert!(matches(&extract_facets(&edge, &vocabulary), &selection));
    assert!(matches(&extract_facets(&unknown, &vocabulary), &selection));
}

#[test]
fn discount_uses_lowest_selected_threshold() {
    let vocabulary = vocabulary();
    let selection = FilterSelection::new()
        .with_value("Discount", "10% and above")
        .with_value("Discount", "20% and above");

    let fifteen = listing_card("a", "Saree", "₹850").with_data("discountPercent", "15");
    let five = listing_card("b", "Saree", "₹950").with_data("discountPercent", "5");
    let unknown = listing_card("c", "Saree", "₹950");

    assert!(matches(&extract_facets(&fifteen, &vocabulary), &selection));
    assert!(!matches(&extract_facets(&five, &vocabulary), &selection));
    assert!(!matches(&extract_facets(&unknown, &vocabulary), &selection));
}

#[test]
fn query_matches_name_phrase() {
    let vocabulary = vocabulary();
    let selection = FilterSelection::new().with_query("  SAREE ");
    let saree = listing_card("a", "Banarasi Saree", "₹399");
    let kurta = listing_card("b", "Cotton Kurta", "₹499");

    assert!(matches(&extract_facets(&saree, &vocabulary), &selection));
    assert!(!matches(&extract_facets(&kurta, &vocabulary), &selection));
}

#[test]
fn extractor_cache_is_explicitly_invalidated() {
    let mut extractor = FacetExtractor::new(vocabulary());
    let card = listing_card("p9", "Green Tant Saree", "₹1,169");
    assert_eq!(extractor.facets(&card).price, Some(1169));
    assert_eq!(extractor.cached_len(), 1);

    extractor.invalidate(&contracts::filtering::ProductKey::new("p9"));
    assert_eq!(extractor.cached_len(), 0);
}

#[test]
fn page_search_requires_every_token() {
    let cards = vec![
        listing_card("a", "Banarasi Silk Saree", "₹399"),
        listing_card("b", "Silk Kurta", "₹499"),
    ];
    let index = PageSearchIndex::build(
        cards
            .iter()
            .map(|c| c as &dyn contracts::filtering::CardSource),
    );
    let outcome = index.run("silk saree");
    assert_eq!(outcome.visible, vec![true, false]);
    assert_eq!(outcome.match_count, 1);
}

#[test]
fn cart_add_twice_then_decrease_to_zero() {
    let storage = MemoryStorage::new();
    let cart = CartStore::new(&storage);
    let card = listing_card("p1", "Banarasi Saree", "₹399").with_attr(".product-image", "src", "s1.jpg");

    let item = CartDraft::from_card(&card, &Selectors::default())
        .unwrap()
        .into_item();
    cart.add(item.clone());
    let items = cart.add(item.clone());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);

    let items = cart.update_quantity(&item.id, 1);
    assert_eq!(items[0].quantity, 1);
    assert!(cart.update_quantity(&item.id, 0).is_empty());
}

#[test]
fn cart_round_trip_preserves_order() {
    let storage = MemoryStorage::new();
    let cart = CartStore::new(&storage);
    let names = ["Zari", "Anarkali", "Kurta"];
    for (i, name) in names.iter().enumerate() {
        cart.add(
            CartDraft {
                name: name.to_string(),
                price: 100.0 * (i + 1) as f64,
                image: String::new(),
            }
            .into_item(),
        );
    }

    let raw = storage.get("cartItems").unwrap().unwrap();
    let reloaded: Vec<CartItem> = serde_json::from_str(&raw).unwrap();
    assert_eq!(reloaded, cart.load());
    let loaded: Vec<&str> = reloaded.iter().map(|it| it.name.as_str()).collect();
    assert_eq!(loaded, names);
    assert_eq!(format_currency(cart_total(&reloaded)), "₹600.00");
}

#[test]
fn corrupt_cart_json_reads_as_empty() {
    let storage = MemoryStorage::new();
    storage.set("cartItems", "[{\"id\":").unwrap();
    assert!(CartStore::new(&storage).load().is_empty());
}

#[test]
fn wishlist_sort_preference_survives_reload() {
    let storage = MemoryStorage::new();
    let store = WishlistStore::new(&storage);
    store.add(WishlistDraft::from_form("Cheap", "", "100", "", "").unwrap());
    store.add(WishlistDraft::from_form("Dear", "", "900", "", "").unwrap());
    store.save_sort_preference(WishlistSort::PriceLow);

    let reopened = WishlistStore::new(&storage);
    let sort = reopened.sort_preference();
    let titles: Vec<String> = reopened
        .visible("", sort)
        .into_iter()
        .map(|it| it.title)
        .collect();
    assert_eq!(titles, ["Cheap", "Dear"]);
}

#[test]
fn listing_handoff_to_product_page() {
    let session = MemoryStorage::new();
    let local = MemoryStorage::new();
    let card = listing_card("p6", "Bandhani Saree", "₹1,169 ₹1,299");
    let catalog = Catalog::seeded();
    save_snapshot(&session, &ProductSnapshot::from_card(&card, "p6", catalog.get("p6"))).unwrap();

    let product = resolve_product("p6", catalog.get("p6"), load_snapshot(&session, "p6"));
    assert_eq!(product.title, "Bandhani Saree");
    assert_eq!(product.rating, Some(4.3));
    assert_eq!(product.reviews.len(), 1);
    assert_eq!(product.stock_of("S"), 6);

    let mut detail = ProductDetail::new(product);
    let cart = CartStore::new(&local);
    detail.select_size("XXL");
    assert_eq!(detail.add_to_cart(&cart), Ok(1));
    assert_eq!(detail.add_to_cart(&cart), Err(ValidationError::OutOfStock));
}
