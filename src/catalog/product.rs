//! Product records shown in the catalog.

use serde::{Deserialize, Serialize};

/// Stable identifier for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Optional stable identifier. Without one, position stands in for identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Display name.
    pub name: String,
    /// Category label used as the filter key.
    pub category: String,
    /// Price in whole currency units.
    pub price: u32,
    /// URL of an externally hosted image.
    pub image: String,
}

impl Product {
    /// Create a product without an id.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: u32,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            price,
            image: image.into(),
        }
    }

    /// Attach a stable id.
    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether this product belongs to `category` (exact match).
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}
