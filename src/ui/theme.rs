//! Color schemes.

use gpui::{rgb, Hsla};
use serde::{Deserialize, Serialize};

/// Which color scheme to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Resolved colors for one scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub background: Hsla,
    pub surface: Hsla,
    pub surface_elevated: Hsla,
    pub border: Hsla,
    pub text_primary: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,
    pub accent: Hsla,
    pub accent_text: Hsla,
    pub price: Hsla,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            background: rgb(0x18181B).into(),
            surface: rgb(0x27272A).into(),
            surface_elevated: rgb(0x3F3F46).into(),
            border: rgb(0x3F3F46).into(),
            text_primary: rgb(0xF4F4F5).into(),
            text_secondary: rgb(0xA1A1AA).into(),
            text_muted: rgb(0x71717A).into(),
            accent: rgb(0x3B82F6).into(),
            accent_text: rgb(0xFFFFFF).into(),
            price: rgb(0x22C55E).into(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: rgb(0xFAFAFA).into(),
            surface: rgb(0xFFFFFF).into(),
            surface_elevated: rgb(0xF4F4F5).into(),
            border: rgb(0xE4E4E7).into(),
            text_primary: rgb(0x18181B).into(),
            text_secondary: rgb(0x52525B).into(),
            text_muted: rgb(0xA1A1AA).into(),
            accent: rgb(0x2563EB).into(),
            accent_text: rgb(0xFFFFFF).into(),
            price: rgb(0x15803D).into(),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

/// Active theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            colors: ThemeColors::for_mode(mode),
        }
    }

    pub fn dark() -> Self {
        Self::new(ThemeMode::Dark)
    }

    pub fn light() -> Self {
        Self::new(ThemeMode::Light)
    }

    /// Switch between dark and light.
    pub fn toggle(&mut self) {
        *self = Self::new(self.mode.toggled());
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_switches_colors() {
        let mut theme = Theme::dark();
        theme.toggle();
        assert_eq!(theme.mode, ThemeMode::Light);
        assert_eq!(theme.colors, ThemeColors::light());

        theme.toggle();
        assert_eq!(theme, Theme::dark());
    }

    #[test]
    fn schemes_contrast() {
        let dark = ThemeColors::dark();
        let light = ThemeColors::light();
        assert!(dark.background.l < dark.text_primary.l);
        assert!(light.background.l > light.text_primary.l);
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
    }
}
