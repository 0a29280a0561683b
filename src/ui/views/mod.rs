//! Application views.
//!
//! Views are the top-level UI components. Each manages its own state and
//! handles user interactions.

mod catalog_view;

pub use catalog_view::CatalogView;
