//! shopfront: a small desktop catalog browser.
//!
//! A fixed, compiled-in list of products is shown as cards and filtered
//! by category through a dropdown.
//!
//! - `catalog`: products, the built-in store and the category filter
//! - `app`: gpui application bootstrap, actions and browser state
//! - `ui`: theme, components and the catalog view
//! - `config`, `logging`, `error`: settings, tracing setup, error types

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

pub use catalog::{CatalogStore, Listing, Product, ProductId, Selection};
pub use config::Settings;
pub use error::{ConfigError, Error, Result};
