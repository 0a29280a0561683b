//! Category filtering and the render model derived from it.

use std::fmt;

use super::product::{Product, ProductId};

/// Label of the selection that shows every product.
pub const ALL_LABEL: &str = "All";

/// The active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// No filtering.
    #[default]
    All,
    /// Only products whose category equals the label exactly.
    Category(String),
}

impl Selection {
    /// Create a category selection.
    pub fn category(label: impl Into<String>) -> Self {
        Selection::Category(label.into())
    }

    /// Map a dropdown label to a selection. `"All"` is the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Selection::All
        } else {
            Selection::Category(label.to_string())
        }
    }

    /// The label shown in the dropdown.
    pub fn label(&self) -> &str {
        match self {
            Selection::All => ALL_LABEL,
            Selection::Category(label) => label,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Whether `product` survives this selection.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Selection::All => true,
            Selection::Category(label) => product.in_category(label),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable filter: keeps matching products in their original relative order.
pub fn filter_products<'a, I>(products: I, selection: &Selection) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|product| selection.matches(product))
        .collect()
}

/// Key identifying a rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKey {
    /// The product's own id.
    Id(ProductId),
    /// Ordinal position in the filtered sequence.
    Position(usize),
}

impl CardKey {
    pub fn for_product(product: &Product, index: usize) -> Self {
        match product.id {
            Some(id) => CardKey::Id(id),
            None => CardKey::Position(index),
        }
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKey::Id(id) => write!(f, "id-{}", id),
            CardKey::Position(index) => write!(f, "pos-{}", index),
        }
    }
}

/// One card to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardEntry<'a> {
    pub key: CardKey,
    /// Position within the filtered sequence.
    pub index: usize,
    pub product: &'a Product,
}

/// Notice shown in place of cards when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyNotice {
    pub title: String,
    pub message: String,
}

impl EmptyNotice {
    pub fn for_selection(selection: &Selection) -> Self {
        let message = match selection {
            Selection::All => "The catalog is empty".to_string(),
            Selection::Category(label) => format!("Nothing in \"{}\" right now", label),
        };
        Self {
            title: "No products found".to_string(),
            message,
        }
    }
}

/// What the filter view draws for a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    Cards(Vec<CardEntry<'a>>),
    Empty(EmptyNotice),
}

impl<'a> Listing<'a> {
    /// Derive the listing for `selection` over `products`.
    pub fn build<I>(products: I, selection: &Selection) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let visible = filter_products(products, selection);
        if visible.is_empty() {
            return Listing::Empty(EmptyNotice::for_selection(selection));
        }

        let cards = visible
            .into_iter()
            .enumerate()
            .map(|(index, product)| CardEntry {
                key: CardKey::for_product(product, index),
                index,
                product,
            })
            .collect();
        Listing::Cards(cards)
    }

    /// Products in render order. Empty for the notice.
    pub fn products(&self) -> Vec<&'a Product> {
        match self {
            Listing::Cards(cards) => cards.iter().map(|c| c.product).collect(),
            Listing::Empty(_) => Vec::new(),
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            Listing::Cards(cards) => cards.len(),
            Listing::Empty(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty(_))
    }
}
