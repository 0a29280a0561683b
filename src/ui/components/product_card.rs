//! Product card component.
//!
//! A card is a pure function of one product and its position in the
//! rendered sequence. The "Buy Now" button has no handler.

use gpui::{
    div, img, px, App, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, Styled, StyledImage, Window,
};

use crate::catalog::{CardEntry, CardKey};
use crate::ui::components::{Button, ButtonSize, ButtonVariant};
use crate::ui::theme::ThemeColors;

const CARD_WIDTH: f32 = 220.0;
const IMAGE_HEIGHT: f32 = 150.0;

/// Format a price with a literal currency prefix.
pub fn price_label(currency_label: &str, price: u32) -> String {
    format!("{}{}", currency_label, price)
}

/// One product card.
#[derive(IntoElement)]
pub struct ProductCard {
    key: CardKey,
    name: SharedString,
    category: SharedString,
    price: SharedString,
    image: SharedString,
    colors: ThemeColors,
}

impl ProductCard {
    pub fn new(entry: &CardEntry<'_>, currency_label: &str) -> Self {
        let product = entry.product;
        Self {
            key: entry.key,
            name: SharedString::from(product.name.clone()),
            category: SharedString::from(product.category.clone()),
            price: SharedString::from(price_label(currency_label, product.price)),
            image: SharedString::from(product.image.clone()),
            colors: ThemeColors::dark(),
        }
    }

    pub fn colors(mut self, colors: ThemeColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn key(&self) -> CardKey {
        self.key
    }

    /// Price with its currency prefix, as displayed.
    pub fn price(&self) -> &SharedString {
        &self.price
    }

    /// Text shown when the image cannot be loaded.
    pub fn alt_text(&self) -> SharedString {
        self.name.clone()
    }

    pub fn element_id(&self) -> SharedString {
        SharedString::from(format!("product-card-{}", self.key()))
    }
}

impl RenderOnce for ProductCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.colors;
        let id = self.element_id();
        let alt = self.alt_text();
        let price = self.price().clone();
        let fallback_bg = colors.surface_elevated;
        let fallback_text = colors.text_muted;

        div()
            .id(ElementId::Name(id.clone()))
            .w(px(CARD_WIDTH))
            .flex()
            .flex_col()
            .rounded(px(8.0))
            .overflow_hidden()
            .border_1()
            .border_color(colors.border)
            .bg(colors.surface)
            .child(
                img(self.image)
                    .w_full()
                    .h(px(IMAGE_HEIGHT))
                    .with_fallback(move || {
                        div()
                            .w_full()
                            .h(px(IMAGE_HEIGHT))
                            .flex()
                            .items_center()
                            .justify_center()
                            .bg(fallback_bg)
                            .text_sm()
                            .text_color(fallback_text)
                            .child(alt.clone())
                            .into_any_element()
                    }),
            )
            .child(
                div()
                    .p(px(12.0))
                    .flex()
                    .flex_col()
                    .gap(px(6.0))
                    .child(
                        div()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(colors.text_primary)
                            .truncate()
                            .child(self.name),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(colors.text_muted)
                            .child(self.category),
                    )
                    .child(
                        div()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(colors.price)
                            .child(price),
                    )
                    .child(
                        Button::new(
                            ElementId::Name(SharedString::from(format!("{}-buy", id))),
                            "Buy Now",
                        )
                        .variant(ButtonVariant::Primary)
                        .size(ButtonSize::Small)
                        .full_width(true)
                        .colors(colors),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogStore, Listing, Product, ProductId, Selection};

    fn cards(store: &CatalogStore, selection: &Selection) -> Vec<ProductCard> {
        match Listing::build(store, selection) {
            Listing::Cards(entries) => entries.iter().map(|e| ProductCard::new(e, "₹")).collect(),
            Listing::Empty(_) => Vec::new(),
        }
    }

    #[test]
    fn price_has_literal_prefix() {
        assert_eq!(price_label("₹", 55000), "₹55000");
        assert_eq!(price_label("Rs. ", 0), "Rs. 0");
    }

    #[test]
    fn card_reflects_product() {
        let cards = cards(CatalogStore::builtin(), &Selection::category("Sports"));
        assert_eq!(cards.len(), 1);

        let card = &cards[0];
        assert_eq!(card.alt_text().as_ref(), "Cricket Kit");
        assert_eq!(card.price().as_ref(), "₹15999");
        assert_eq!(card.key(), CardKey::Id(ProductId(4)));
        assert_eq!(card.element_id().as_ref(), "product-card-id-4");
    }

    #[test]
    fn ids_are_unique_without_product_ids() {
        let store = CatalogStore::from_products(vec![
            Product::new("Socks", "Clothing", 99, ""),
            Product::new("Socks", "Clothing", 99, ""),
        ]);
        let cards = cards(&store, &Selection::All);
        let ids: Vec<SharedString> = cards.iter().map(|c| c.element_id()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }
}
