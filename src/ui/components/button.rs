//! Button component.

use gpui::{
    div, prelude::FluentBuilder, px, App, ClickEvent, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::ui::theme::ThemeColors;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Visual style of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the accent color.
    #[default]
    Primary,
    /// Outlined, surface background.
    Secondary,
}

/// Button size options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// 28px height.
    Small,
    /// 32px height.
    #[default]
    Medium,
    /// 40px height.
    Large,
}

/// A clickable (or deliberately inert) button.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    colors: ThemeColors,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            full_width: false,
            colors: ThemeColors::dark(),
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn colors(mut self, colors: ThemeColors) -> Self {
        self.colors = colors;
        self
    }

    /// Attach a click handler. Without one the button does nothing.
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn label(&self) -> &SharedString {
        &self.label
    }

    pub fn is_interactive(&self) -> bool {
        self.on_click.is_some()
    }

    fn height(&self) -> f32 {
        match self.size {
            ButtonSize::Small => 28.0,
            ButtonSize::Medium => 32.0,
            ButtonSize::Large => 40.0,
        }
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let height = self.height();
        let colors = self.colors;

        let (bg, text, border) = match self.variant {
            ButtonVariant::Primary => (colors.accent, colors.accent_text, colors.accent),
            ButtonVariant::Secondary => (colors.surface, colors.text_primary, colors.border),
        };
        let hover_bg = match self.variant {
            ButtonVariant::Primary => colors.accent.opacity(0.85),
            ButtonVariant::Secondary => colors.surface_elevated,
        };

        div()
            .id(self.id)
            .h(px(height))
            .px(px(12.0))
            .flex()
            .items_center()
            .justify_center()
            .gap(px(6.0))
            .rounded(px(6.0))
            .border_1()
            .border_color(border)
            .bg(bg)
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .text_color(text)
            .when(self.full_width, |this| this.w_full())
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg))
            .when_some(self.on_click, |this, handler| this.on_click(handler))
            .child(self.label)
    }
}
