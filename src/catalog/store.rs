//! The built-in product catalog.
//!
//! The catalog is compiled into the binary and created once, on first
//! access. Nothing mutates it afterwards; views borrow it for the life of
//! the process.

use std::sync::OnceLock;

use super::filter::Selection;
use super::product::Product;

static BUILTIN: OnceLock<CatalogStore> = OnceLock::new();

/// Read-only, ordered collection of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static CatalogStore {
        BUILTIN.get_or_init(|| {
            tracing::debug!("initializing built-in catalog");
            Self::from_products(builtin_products())
        })
    }

    /// Build a catalog from an explicit product list, preserving order.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category labels in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for product in &self.products {
            if !labels.contains(&product.category.as_str()) {
                labels.push(&product.category);
            }
        }
        labels
    }

    /// Whether any product carries `category`.
    pub fn has_category(&self, category: &str) -> bool {
        self.products.iter().any(|p| p.in_category(category))
    }

    /// Number of products `selection` would show.
    pub fn count_in(&self, selection: &Selection) -> usize {
        self.products.iter().filter(|p| selection.matches(p)).count()
    }
}

impl<'a> IntoIterator for &'a CatalogStore {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        Product::new(
            "Laptop",
            "Electronics",
            55000,
            "https://via.placeholder.com/200x150?text=Laptop",
        )
        .with_id(1),
        Product::new(
            "Shirt",
            "Clothing",
            999,
            "https://via.placeholder.com/200x150?text=Shirt",
        )
        .with_id(2),
        Product::new(
            "Rice Bag",
            "Grocery",
            799,
            "https://via.placeholder.com/200x150?text=Rice+Bag",
        )
        .with_id(3),
        Product::new(
            "Cricket Kit",
            "Sports",
            15999,
            "https://via.placeholder.com/200x150?text=Cricket+Kit",
        )
        .with_id(4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_contents() {
        let store = CatalogStore::builtin();
        let names: Vec<&str> = store.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Laptop", "Shirt", "Rice Bag", "Cricket Kit"]);

        let prices: Vec<u32> = store.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![55000, 999, 799, 15999]);
    }

    #[test]
    fn builtin_is_a_single_instance() {
        let a = CatalogStore::builtin() as *const CatalogStore;
        let b = CatalogStore::builtin() as *const CatalogStore;
        assert_eq!(a, b);
    }

    #[test]
    fn builtin_products_have_names() {
        for product in CatalogStore::builtin() {
            assert!(!product.name.is_empty());
            assert!(product.id.is_some());
        }
    }

    #[test]
    fn categories_in_first_appearance_order() {
        let store = CatalogStore::from_products(vec![
            Product::new("A", "Sports", 1, ""),
            Product::new("B", "Grocery", 2, ""),
            Product::new("C", "Sports", 3, ""),
            Product::new("D", "Clothing", 4, ""),
        ]);
        assert_eq!(store.categories(), vec!["Sports", "Grocery", "Clothing"]);
        assert!(store.has_category("Grocery"));
        assert!(!store.has_category("Home"));
    }

    #[test]
    fn count_in_selection() {
        let store = CatalogStore::builtin();
        assert_eq!(store.count_in(&Selection::All), 4);
        assert_eq!(store.count_in(&Selection::category("Sports")), 1);
        assert_eq!(store.count_in(&Selection::category("Home")), 0);
    }

    #[test]
    fn empty_store() {
        let store = CatalogStore::from_products(Vec::new());
        assert!(store.is_empty());
        assert!(store.categories().is_empty());
    }
}
