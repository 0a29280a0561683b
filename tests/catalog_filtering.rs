use pretty_assertions::assert_eq;
use shopfront::app::BrowserState;
use shopfront::catalog::{filter_products, CardKey, Listing, Product, ProductId};
use shopfront::{CatalogStore, Selection};

fn visible_names(state: &BrowserState<'_>) -> Vec<String> {
    state
        .listing()
        .products()
        .into_iter()
        .map(|p| p.name.clone())
        .collect()
}

#[test]
fn selection_walkthrough() {
    let mut state = BrowserState::new(CatalogStore::builtin());
    assert_eq!(state.selection(), &Selection::All);

    state.select_category("Electronics");
    assert_eq!(visible_names(&state), vec!["Laptop"]);

    state.select_category("Clothing");
    assert_eq!(visible_names(&state), vec!["Shirt"]);

    state.select_category("Home");
    match state.listing() {
        Listing::Empty(notice) => assert_eq!(notice.title, "No products found"),
        Listing::Cards(cards) => panic!("expected empty notice, got {} cards", cards.len()),
    }

    state.select_category("All");
    assert_eq!(
        visible_names(&state),
        vec!["Laptop", "Shirt", "Rice Bag", "Cricket Kit"]
    );
}

#[test]
fn every_option_counts_match_catalog() {
    let store = CatalogStore::builtin();
    let state = BrowserState::new(store);

    for option in state.options() {
        let selection = Selection::from_label(&option);
        let expected = if selection.is_all() {
            store.len()
        } else {
            store.iter().filter(|p| p.category == option).count()
        };
        assert_eq!(filter_products(store, &selection).len(), expected, "{option}");
    }
}

#[test]
fn all_restores_order_after_any_selection() {
    let store = CatalogStore::builtin();
    let original: Vec<&Product> = store.iter().collect();

    let mut state = BrowserState::new(store);
    for option in state.options() {
        state.select_category(&option);
        state.select_category("All");
        assert_eq!(state.listing().products(), original);
    }
}

#[test]
fn card_keys_follow_product_ids() {
    let listing = Listing::build(CatalogStore::builtin(), &Selection::All);
    let keys: Vec<CardKey> = match listing {
        Listing::Cards(cards) => cards.into_iter().map(|c| c.key).collect(),
        Listing::Empty(_) => Vec::new(),
    };
    assert_eq!(
        keys,
        (1..=4).map(|id| CardKey::Id(ProductId(id))).collect::<Vec<_>>()
    );
}
