//! Reusable UI components.
//!
//! Components are stateless `RenderOnce` elements where possible, with
//! styling driven by the theme. `dropdown` holds the one piece of
//! component state (open/highlight) that its owning view drives.

pub mod button;
pub mod dropdown;
pub mod list;
pub mod product_card;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use dropdown::{DropdownKeyResult, DropdownState};
pub use list::EmptyState;
pub use product_card::{price_label, ProductCard};
