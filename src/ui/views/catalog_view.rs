//! Catalog view.
//!
//! Header with the category dropdown, then a wrapping grid of product
//! cards, or an empty-state notice when the selection matches nothing.

use std::cell::Cell;
use std::rc::Rc;

use gpui::{
    deferred, div, prelude::FluentBuilder, px, AnyElement, ClickEvent, Context, ElementId,
    FocusHandle, Focusable, FontWeight, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::{
    BrowserState, Dismiss, NextCategory, PreviousCategory, ToggleCategoryMenu, ToggleTheme,
    CATALOG_CONTEXT,
};
use crate::catalog::{CatalogStore, Listing, Selection};
use crate::config::Settings;
use crate::ui::components::{
    Button, ButtonVariant, DropdownKeyResult, DropdownState, EmptyState, ProductCard,
};
use crate::ui::theme::Theme;

const MENU_WIDTH: f32 = 200.0;

/// Header summary, e.g. "4 products" or "1 product in Sports".
fn summary_text(count: usize, selection: &Selection) -> String {
    let noun = if count == 1 { "product" } else { "products" };
    match selection {
        Selection::All => format!("{} {}", count, noun),
        Selection::Category(label) => format!("{} {} in {}", count, noun, label),
    }
}

/// The root view: filterable product grid.
pub struct CatalogView {
    theme: Theme,
    focus_handle: FocusHandle,
    state: BrowserState<'static>,
    dropdown: DropdownState,
    settings: Settings,
    render_requested: Rc<Cell<bool>>,
}

impl CatalogView {
    pub fn new(settings: &Settings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let render_requested = Rc::new(Cell::new(false));
        let mut state = BrowserState::new(CatalogStore::builtin());

        let requested = Rc::clone(&render_requested);
        state.on_change(move |selection| {
            tracing::debug!(selection = %selection, "render requested");
            requested.set(true);
        });

        tracing::info!(
            products = state.catalog().len(),
            categories = state.catalog().categories().len(),
            "catalog view initialized"
        );

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            theme: Theme::new(settings.theme),
            focus_handle,
            state,
            dropdown: DropdownState::new(),
            settings: settings.clone(),
            render_requested,
        }
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        self.state.selection()
    }

    /// Select a category by label. `"All"` clears the filter.
    pub fn select_category(&mut self, label: &str, cx: &mut Context<Self>) {
        self.dropdown.close();
        self.state.select_category(label);
        self.flush_render(cx);
    }

    fn cycle_category(&mut self, step: isize, cx: &mut Context<Self>) {
        self.dropdown.close();
        self.state.cycle(step);
        self.flush_render(cx);
    }

    /// Turn a pending render request from the selection cell into a repaint.
    fn flush_render(&mut self, cx: &mut Context<Self>) {
        if self.render_requested.replace(false) {
            cx.notify();
        }
    }

    fn toggle_menu(&mut self, cx: &mut Context<Self>) {
        self.dropdown.toggle(self.state.selected_option());
        cx.notify();
    }

    fn dismiss(&mut self, cx: &mut Context<Self>) {
        if self.dropdown.is_open() {
            self.dropdown.close();
            cx.notify();
        }
    }

    fn toggle_theme(&mut self, cx: &mut Context<Self>) {
        self.theme.toggle();
        tracing::debug!(mode = ?self.theme.mode, "theme toggled");

        let saved = Settings::default_path()
            .and_then(|path| self.settings.persist_theme(self.theme.mode, &path));
        if let Err(err) = saved {
            tracing::warn!("theme not saved: {}", err);
        }
        cx.notify();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let options = self.state.options();
        match self
            .dropdown
            .process_key(event.keystroke.key.as_str(), options.len())
        {
            DropdownKeyResult::Moved | DropdownKeyResult::Dismissed => cx.notify(),
            DropdownKeyResult::Confirmed(index) => self.select_category(&options[index], cx),
            DropdownKeyResult::Ignored => {}
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.theme.colors;
        let selection = self.state.selection();
        let count = self.state.catalog().count_in(selection);

        div()
            .px(px(24.0))
            .py(px(16.0))
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(colors.border)
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(SharedString::from("Product Catalog")),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(colors.text_muted)
                            .child(SharedString::from(summary_text(count, selection))),
                    ),
            )
            .child(
                div()
                    .relative()
                    .flex()
                    .items_center()
                    .gap(px(8.0))
                    .child(
                        div()
                            .text_sm()
                            .text_color(colors.text_secondary)
                            .child(SharedString::from("Category")),
                    )
                    .child(
                        Button::new(
                            "category-dropdown",
                            SharedString::from(format!("{} v", selection.label())),
                        )
                        .variant(ButtonVariant::Secondary)
                        .colors(colors)
                        .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                            this.toggle_menu(cx);
                        })),
                    )
                    .when(self.dropdown.is_open(), |this| {
                        this.child(deferred(self.render_menu(cx)).with_priority(1))
                    }),
            )
    }

    fn render_menu(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.theme.colors;
        let current = self.state.selection().label().to_string();
        let highlighted = self.dropdown.highlighted();
        let catalog = self.state.catalog();

        let rows: Vec<AnyElement> = self
            .state
            .options()
            .into_iter()
            .enumerate()
            .map(|(index, label)| {
                let is_current = label == current;
                let is_highlighted = index == highlighted;
                let count = catalog.count_in(&Selection::from_label(&label));
                let hover_bg = colors.surface_elevated;
                let option = label.clone();

                div()
                    .id(ElementId::Name(SharedString::from(format!(
                        "category-option-{}",
                        index
                    ))))
                    .px(px(12.0))
                    .py(px(6.0))
                    .flex()
                    .items_center()
                    .justify_between()
                    .cursor_pointer()
                    .when(is_highlighted, |this| this.bg(colors.surface_elevated))
                    .hover(move |style| style.bg(hover_bg))
                    .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                        this.select_category(&option, cx);
                    }))
                    .child(
                        div()
                            .text_sm()
                            .when(is_current, |this| {
                                this.font_weight(FontWeight::SEMIBOLD)
                                    .text_color(colors.accent)
                            })
                            .when(!is_current, |this| this.text_color(colors.text_primary))
                            .child(SharedString::from(label)),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(colors.text_muted)
                            .child(SharedString::from(count.to_string())),
                    )
                    .into_any_element()
            })
            .collect();

        div()
            .id("category-menu")
            .absolute()
            .top(px(40.0))
            .right_0()
            .w(px(MENU_WIDTH))
            .py(px(4.0))
            .rounded(px(6.0))
            .border_1()
            .border_color(colors.border)
            .bg(colors.surface)
            .shadow_md()
            .occlude()
            .children(rows)
    }

    fn render_listing(&self) -> AnyElement {
        let colors = self.theme.colors;
        match self.state.listing() {
            Listing::Cards(entries) => div()
                .flex()
                .flex_wrap()
                .gap(px(16.0))
                .children(entries.iter().map(|entry| {
                    ProductCard::new(entry, &self.settings.currency_label).colors(colors)
                }))
                .into_any_element(),
            Listing::Empty(notice) => EmptyState::new(notice.title)
                .message(notice.message)
                .colors(colors)
                .into_any_element(),
        }
    }
}

impl Focusable for CatalogView {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for CatalogView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.theme.colors;

        div()
            .id("catalog-view")
            .key_context(CATALOG_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key(event, cx);
            }))
            .on_action(cx.listener(|this, _: &Dismiss, _, cx| this.dismiss(cx)))
            .on_action(cx.listener(|this, _: &ToggleCategoryMenu, _, cx| this.toggle_menu(cx)))
            .on_action(cx.listener(|this, _: &NextCategory, _, cx| this.cycle_category(1, cx)))
            .on_action(
                cx.listener(|this, _: &PreviousCategory, _, cx| this.cycle_category(-1, cx)),
            )
            .on_action(cx.listener(|this, _: &ToggleTheme, _, cx| this.toggle_theme(cx)))
            .size_full()
            .flex()
            .flex_col()
            .bg(colors.background)
            .text_color(colors.text_primary)
            .child(self.render_header(cx))
            .child(
                div()
                    .id("catalog-grid")
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_y_scroll()
                    .p(px(24.0))
                    .child(self.render_listing()),
            )
    }
}
