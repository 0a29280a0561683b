//! Application state and lifecycle management.
//!
//! This module contains:
//! - Filter state and the selection cell (state.rs)
//! - Action definitions (inline via gpui::actions!)
//! - Keybinding registration

pub mod state;

pub use state::{BrowserState, SelectionCell};

use anyhow::Result;
use gpui::{
    actions, px, size, AppContext, Application, Bounds, KeyBinding, WindowBounds, WindowOptions,
};

use crate::config::Settings;
use crate::ui::CatalogView;

// Define application actions
actions!(
    shopfront,
    [
        Quit,
        Dismiss,
        ToggleCategoryMenu,
        NextCategory,
        PreviousCategory,
        ToggleTheme,
    ]
);

/// Key context in which single-letter bindings are active.
pub const CATALOG_CONTEXT: &str = "CatalogView";

/// Main application entry point
pub struct App;

impl App {
    /// Run the application
    pub fn run(settings: Settings) -> Result<()> {
        Application::new().run(move |cx: &mut gpui::App| {
            Self::register_keybindings(cx);
            cx.on_action(|_: &Quit, cx| cx.quit());

            let bounds = Bounds::centered(
                None,
                size(px(settings.window_width), px(settings.window_height)),
                cx,
            );
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            };

            let view_settings = settings.clone();
            let opened = cx.open_window(options, move |window, cx| {
                cx.new(|cx| CatalogView::new(&view_settings, window, cx))
            });
            if let Err(err) = opened {
                tracing::error!("failed to open window: {err:?}");
                cx.quit();
            }
        });

        Ok(())
    }

    /// Register global keybindings
    fn register_keybindings(cx: &mut gpui::App) {
        let catalog_ctx = Some(CATALOG_CONTEXT);

        cx.bind_keys([
            // Quit and dismiss - global, always available
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
            KeyBinding::new("escape", Dismiss, None),
            // Category navigation - only while the catalog has focus
            KeyBinding::new("f", ToggleCategoryMenu, catalog_ctx),
            KeyBinding::new("]", NextCategory, catalog_ctx),
            KeyBinding::new("[", PreviousCategory, catalog_ctx),
            KeyBinding::new("t", ToggleTheme, catalog_ctx),
        ]);
    }
}
