//! Centralized theming for the courier TUI
//!
//! Single source of truth for all colors and styles used by the panels.

use ratatui::style::{Color, Modifier, Style};
use std::sync::RwLock;

use crate::config::ThemeVariant;

static THEME_VARIANT: RwLock<ThemeVariant> = RwLock::new(ThemeVariant::Dark);

/// Initialize the theme variant (call once at startup)
pub fn init_theme(variant: ThemeVariant) {
    if let Ok(mut guard) = THEME_VARIANT.write() {
        *guard = variant;
    }
}

pub fn current_theme() -> ThemeVariant {
    THEME_VARIANT.read().map(|g| *g).unwrap_or_default()
}

/// Color palette - colors that vary by theme
pub mod colors {
    use super::*;

    pub fn bg_selection() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(69, 71, 90),
            ThemeVariant::HighContrast => Color::White,
        }
    }

    pub fn bg_status() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::DarkGray,
            ThemeVariant::HighContrast => Color::Black,
        }
    }

    pub fn bg_error() -> Color {
        Color::Red
    }

    pub fn fg_primary() -> Color {
        Color::White
    }

    pub fn fg_secondary() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Gray,
            ThemeVariant::HighContrast => Color::White,
        }
    }

    pub fn fg_muted() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::DarkGray,
            ThemeVariant::HighContrast => Color::Gray,
        }
    }

    pub fn fg_accent() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Cyan,
            ThemeVariant::HighContrast => Color::Yellow,
        }
    }

    pub fn fg_on_selection() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::White,
            ThemeVariant::HighContrast => Color::Black,
        }
    }
}

/// Glyphs used across panels
pub mod symbols {
    pub const UNREAD: &str = "●";
    pub const READ: &str = " ";
    pub const BACK: &str = "◀";
    pub const FORWARD: &str = "▶";
}

pub struct Theme;

impl Theme {
    pub fn text() -> Style {
        Style::default().fg(colors::fg_primary())
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(colors::fg_secondary())
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors::fg_muted())
    }

    pub fn text_accent() -> Style {
        Style::default().fg(colors::fg_accent())
    }

    /// Rows of emails not yet opened
    pub fn row_unread() -> Style {
        Self::text().add_modifier(Modifier::BOLD)
    }

    /// Rows of emails already opened get the grey treatment
    pub fn row_read() -> Style {
        Self::text_muted()
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(colors::bg_selection())
            .fg(colors::fg_on_selection())
    }

    pub fn title() -> Style {
        Self::text_accent().add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Self::text_secondary().add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Self::text_muted()
    }

    pub fn border_focused() -> Style {
        Self::text_accent()
    }

    pub fn status_bar() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::fg_primary())
    }

    pub fn error_bar() -> Style {
        Style::default()
            .bg(colors::bg_error())
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_key() -> Style {
        Self::text_accent().add_modifier(Modifier::BOLD)
    }

    pub fn help_desc() -> Style {
        Self::text_secondary()
    }

    /// Button-like control in the detail view
    pub fn control() -> Style {
        Self::text_accent().add_modifier(Modifier::REVERSED)
    }
}
