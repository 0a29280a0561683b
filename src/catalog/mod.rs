//! Catalog data and filtering.
//!
//! - `product`: the product record
//! - `store`: the immutable, compiled-in catalog
//! - `filter`: category selection and the derived card listing

pub mod filter;
pub mod product;
pub mod store;

pub use filter::{
    filter_products, CardEntry, CardKey, EmptyNotice, Listing, Selection, ALL_LABEL,
};
pub use product::{Product, ProductId};
pub use store::CatalogStore;
