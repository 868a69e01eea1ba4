//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and pre-built styles used by
//! the rendering modules, so components never hardcode their own.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background - used for panels and the summary view
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color - borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Error/danger feedback
    pub const ERROR: Color = Color::Red;

    /// Informational feedback
    pub const INFO: Color = Color::Blue;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;
}

/// Pre-built styles for recurring widget roles
pub struct Styles;

impl Styles {
    /// Panel title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted list entry under the cursor
    pub fn cursor() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Entry that is part of the current selection
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Error banner text
    pub fn error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// De-emphasized hint text
    pub fn hint() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }
}
