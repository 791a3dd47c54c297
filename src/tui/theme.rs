//! Theme system for consistent UI colors across dark and light modes.
//!
//! Detects the OS theme (dark/light mode) when the configuration asks for
//! `Auto` and applies appropriate colors.

// Reference colors are in range, so narrowing their channels is exact
#![allow(clippy::cast_possible_truncation)]

use ratatui::style::Color as TermColor;

use crate::config::ThemeMode;
use crate::models::{ContrastLevel, INK, PANEL};

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: TermColor,
    /// Accent color for highlights, selections, and focus states
    pub accent: TermColor,
    /// Success state color
    pub success: TermColor,
    /// Error state color
    pub error: TermColor,
    /// Warning state color
    pub warning: TermColor,

    /// Primary text content color
    pub text: TermColor,
    /// Muted text color for help text and dim content
    pub text_muted: TermColor,

    /// Main background color
    pub background: TermColor,
    /// Inactive/disabled element color
    pub inactive: TermColor,
}

impl Theme {
    /// Detects the OS theme and returns the matching Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured theme preference.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme built around the panel reference color.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: TermColor::Cyan,
            accent: TermColor::Yellow,
            success: TermColor::Green,
            error: TermColor::Red,
            warning: TermColor::Yellow,

            text: TermColor::Rgb(INK.r as u8, INK.g as u8, INK.b as u8),
            text_muted: TermColor::DarkGray,

            background: TermColor::Rgb(PANEL.r as u8, PANEL.g as u8, PANEL.b as u8),
            inactive: TermColor::Gray,
        }
    }

    /// Light theme for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: TermColor::Blue,
            accent: TermColor::Rgb(180, 100, 0),
            success: TermColor::Rgb(0, 128, 0),
            error: TermColor::Red,
            warning: TermColor::Rgb(200, 100, 0),

            text: TermColor::Black,
            text_muted: TermColor::Gray,

            background: TermColor::White,
            inactive: TermColor::Rgb(180, 180, 180),
        }
    }

    /// Badge color for a compliance level.
    #[must_use]
    pub const fn level_color(&self, level: ContrastLevel) -> TermColor {
        match level {
            ContrastLevel::Fail => self.error,
            ContrastLevel::AaLarge => self.warning,
            ContrastLevel::Aa | ContrastLevel::Aaa => self.success,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
