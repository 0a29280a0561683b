//! List helpers.

use gpui::{div, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::ui::theme::ThemeColors;

/// Centered notice shown when a list has nothing to display.
#[derive(IntoElement)]
pub struct EmptyState {
    title: SharedString,
    message: Option<SharedString>,
    colors: ThemeColors,
}

impl EmptyState {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            message: None,
            colors: ThemeColors::dark(),
        }
    }

    pub fn message(mut self, message: impl Into<SharedString>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn colors(mut self, colors: ThemeColors) -> Self {
        self.colors = colors;
        self
    }
}

impl RenderOnce for EmptyState {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div().flex_1().flex().items_center().justify_center().child(
            div()
                .flex()
                .flex_col()
                .items_center()
                .gap(px(8.0))
                .child(
                    div()
                        .text_color(self.colors.text_primary)
                        .child(self.title),
                )
                .children(self.message.map(|message| {
                    div()
                        .text_sm()
                        .text_color(self.colors.text_muted)
                        .child(message)
                })),
        )
    }
}
