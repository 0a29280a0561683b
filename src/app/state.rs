//! Browser state.
//!
//! The selection lives in a [`SelectionCell`]: a single-writer cell with
//! exactly one subscriber. Every write notifies the subscriber once,
//! synchronously, before `set` returns. Writes are never coalesced.

use crate::catalog::{CatalogStore, Listing, Selection, ALL_LABEL};

/// Callback invoked after each write.
type Subscriber<T> = Box<dyn FnMut(&T) + 'static>;

/// A value with one writer and one subscriber.
pub struct SelectionCell<T> {
    value: T,
    subscriber: Option<Subscriber<T>>,
}

impl<T> SelectionCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscriber: None,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Install the subscriber, replacing any previous one.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) {
        self.subscriber = Some(Box::new(callback));
    }

    /// Remove the subscriber.
    pub fn unsubscribe(&mut self) {
        self.subscriber = None;
    }

    pub fn has_subscriber(&self) -> bool {
        self.subscriber.is_some()
    }

    /// Replace the value wholesale and notify the subscriber.
    pub fn set(&mut self, value: T) {
        self.value = value;
        if let Some(callback) = self.subscriber.as_mut() {
            callback(&self.value);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SelectionCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionCell")
            .field("value", &self.value)
            .field("subscribed", &self.subscriber.is_some())
            .finish()
    }
}

/// Filter state bound to a catalog.
#[derive(Debug)]
pub struct BrowserState<'a> {
    catalog: &'a CatalogStore,
    selection: SelectionCell<Selection>,
}

impl<'a> BrowserState<'a> {
    /// Bind to `catalog` with everything selected.
    pub fn new(catalog: &'a CatalogStore) -> Self {
        Self {
            catalog,
            selection: SelectionCell::new(Selection::All),
        }
    }

    pub fn catalog(&self) -> &'a CatalogStore {
        self.catalog
    }

    pub fn selection(&self) -> &Selection {
        self.selection.get()
    }

    /// Install the render subscriber.
    pub fn on_change(&mut self, callback: impl FnMut(&Selection) + 'static) {
        self.selection.subscribe(callback);
    }

    /// Select by dropdown label.
    ///
    /// Labels absent from the catalog are accepted and produce an empty
    /// listing.
    pub fn select_category(&mut self, label: &str) {
        self.select(Selection::from_label(label));
    }

    pub fn select(&mut self, selection: Selection) {
        if let Selection::Category(label) = &selection {
            if !self.catalog.has_category(label) {
                tracing::debug!(label = %label, "selected category is not in the catalog");
            }
        }
        tracing::info!(selection = %selection, "category selected");
        self.selection.set(selection);
    }

    /// Dropdown options: the `All` sentinel followed by catalog categories.
    pub fn options(&self) -> Vec<String> {
        std::iter::once(ALL_LABEL)
            .chain(self.catalog.categories())
            .map(str::to_string)
            .collect()
    }

    /// Index of the current selection among [`options`](Self::options).
    pub fn selected_option(&self) -> Option<usize> {
        let current = self.selection().label();
        self.options().iter().position(|o| o == current)
    }

    /// Move the selection `step` options forward, wrapping at either end.
    ///
    /// From a label that is not an option, forward starts at the first
    /// option and backward at the last.
    pub fn cycle(&mut self, step: isize) {
        let options = self.options();
        let len = options.len() as isize;
        if len == 0 {
            return;
        }
        let next = match self.selected_option() {
            Some(current) => (current as isize + step).rem_euclid(len),
            None if step >= 0 => 0,
            None => len - 1,
        };
        self.select_category(&options[next as usize]);
    }

    /// Derive the current render model.
    pub fn listing(&self) -> Listing<'a> {
        let listing = Listing::build(self.catalog, self.selection());
        tracing::debug!(
            selection = %self.selection(),
            cards = listing.card_count(),
            "listing derived"
        );
        listing
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::catalog::Product;
    use pretty_assertions::assert_eq;

    fn names(state: &BrowserState<'_>) -> Vec<String> {
        state
            .listing()
            .products()
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    #[test]
    fn cell_notifies_on_every_write() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut cell = SelectionCell::new(0);
        let sink = Rc::clone(&seen);
        cell.subscribe(move |v| sink.borrow_mut().push(*v));

        cell.set(1);
        cell.set(1);
        cell.set(2);
        assert_eq!(*seen.borrow(), vec![1, 1, 2]);
        assert_eq!(*cell.get(), 2);
    }

    #[test]
    fn cell_has_single_subscriber() {
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));
        let mut cell = SelectionCell::new("a");

        let f = Rc::clone(&first);
        cell.subscribe(move |_| *f.borrow_mut() += 1);
        let s = Rc::clone(&second);
        cell.subscribe(move |_| *s.borrow_mut() += 1);

        cell.set("b");
        assert_eq!(*first.borrow(), 0);
        assert_eq!(*second.borrow(), 1);

        cell.unsubscribe();
        assert!(!cell.has_subscriber());
        cell.set("c");
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn initializes_to_all() {
        let state = BrowserState::new(CatalogStore::builtin());
        assert_eq!(state.selection(), &Selection::All);
        assert_eq!(names(&state).len(), 4);
    }

    #[test]
    fn selection_scenario() {
        let mut state = BrowserState::new(CatalogStore::builtin());

        state.select_category("Electronics");
        assert_eq!(names(&state), vec!["Laptop"]);

        state.select_category("Clothing");
        assert_eq!(names(&state), vec!["Shirt"]);

        state.select_category("Home");
        assert_eq!(state.selection(), &Selection::category("Home"));
        assert!(state.listing().is_empty());

        state.select_category("All");
        assert_eq!(
            names(&state),
            vec!["Laptop", "Shirt", "Rice Bag", "Cricket Kit"]
        );
    }

    #[test]
    fn each_selection_notifies_subscriber_once() {
        let notified = Rc::new(RefCell::new(Vec::new()));
        let mut state = BrowserState::new(CatalogStore::builtin());
        let sink = Rc::clone(&notified);
        state.on_change(move |s| sink.borrow_mut().push(s.clone()));

        state.select_category("Sports");
        state.select_category("Sports");
        state.select_category("All");

        assert_eq!(
            *notified.borrow(),
            vec![
                Selection::category("Sports"),
                Selection::category("Sports"),
                Selection::All,
            ]
        );
    }

    #[test]
    fn options_start_with_all() {
        let state = BrowserState::new(CatalogStore::builtin());
        assert_eq!(
            state.options(),
            vec!["All", "Electronics", "Clothing", "Grocery", "Sports"]
        );
        assert_eq!(state.selected_option(), Some(0));
    }

    #[test]
    fn cycle_wraps_both_ways() {
        let mut state = BrowserState::new(CatalogStore::builtin());

        state.cycle(-1);
        assert_eq!(state.selection(), &Selection::category("Sports"));

        state.cycle(1);
        assert_eq!(state.selection(), &Selection::All);

        state.cycle(1);
        assert_eq!(state.selection(), &Selection::category("Electronics"));
    }

    #[test]
    fn cycle_from_unknown_label() {
        let mut state = BrowserState::new(CatalogStore::builtin());
        state.select_category("Home");
        assert_eq!(state.selected_option(), None);

        state.cycle(1);
        assert_eq!(state.selection(), &Selection::All);

        state.select_category("Home");
        state.cycle(-1);
        assert_eq!(state.selection(), &Selection::category("Sports"));
    }

    #[test]
    fn works_over_injected_catalog() {
        let catalog = CatalogStore::from_products(vec![
            Product::new("Kettle", "Kitchen", 1200, ""),
            Product::new("Pan", "Kitchen", 900, ""),
        ]);
        let mut state = BrowserState::new(&catalog);
        state.select_category("Kitchen");
        assert_eq!(names(&state), vec!["Kettle", "Pan"]);
    }
}
