//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Header, title, banner, nav bar and help overlay
//! - `sections` - Section editing screen
//! - `summary` - Generated summary screen

mod header;
mod sections;
mod summary;

use crate::app::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

// Re-export for external use
pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// Main entry point for rendering. Delegates to the screen module
/// matching the current application mode.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        // Main layout with nav bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        match state.mode {
            AppMode::Editing => {
                sections::render_editing_in_area(f, state, main_chunks[0], &self.header);
            }
            AppMode::Reviewing => {
                summary::render_summary_in_area(f, state, main_chunks[0], &self.header);
            }
        }

        header::render_nav_bar(f, state, main_chunks[1]);

        // Help overlay on top of everything
        if state.help_visible {
            header::render_help_overlay(f);
        }
    }
}
