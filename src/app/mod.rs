//! Application module
//!
//! Contains the main application struct, the event loop and keyboard
//! handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState};

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::summary::SelectedComponent;
use crate::ui::UiRenderer;

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Where to write the plain-text summary when one is generated
    export_path: Option<PathBuf>,
}

impl App {
    /// Create a new application instance
    pub fn new(state: AppState, export_path: Option<PathBuf>) -> Self {
        info!(
            sections = state.catalog.sections.len(),
            "creating selector session"
        );
        Self {
            state,
            ui_renderer: UiRenderer::new(),
            export_path,
        }
    }

    /// Run the main application loop until the user quits
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        info!("starting main application loop");

        loop {
            // Handle input events
            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(_, _) => {
                        // Next draw picks up the new size
                    }
                    _ => {}
                }
            }

            // Render UI
            terminal.draw(|f| self.ui_renderer.render(f, &self.state))?;
        }

        info!("application loop finished");
        Ok(())
    }

    /// Handle a keyboard event. Returns true when the user asked to quit.
    fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // Help overlay swallows everything until dismissed
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_visible = false;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => {
                self.state.help_visible = true;
                return false;
            }
            _ => {}
        }

        match self.state.mode {
            AppMode::Editing => self.handle_editing_key(key_event),
            AppMode::Reviewing => self.handle_reviewing_key(key_event),
        }

        false
    }

    /// Keys available while toggling options
    fn handle_editing_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up => self.state.previous_option(),
            KeyCode::Down => self.state.next_option(),
            KeyCode::Left | KeyCode::BackTab => self.state.previous_section(),
            KeyCode::Right | KeyCode::Tab => self.state.next_section(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.state.toggle_current();
                debug!(
                    selections = self.state.selections.len(),
                    "selection state changed"
                );
            }
            KeyCode::Char('g') => {
                if self.state.generate_summary().is_ok() {
                    self.export_report();
                } else {
                    debug!("summary generation blocked by validation");
                }
            }
            KeyCode::Char('r') => self.state.reset(),
            _ => {}
        }
    }

    /// Keys available on the summary screen
    fn handle_reviewing_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('b') => self.state.back_to_editing(),
            KeyCode::Char('e') => self.export_report(),
            KeyCode::Char('r') => self.state.reset(),
            _ => {}
        }
    }

    /// Write the captured report as plain text if an export path was given
    fn export_report(&mut self) {
        let Some(path) = self.export_path.clone() else {
            return;
        };

        let text = render_report_text(&self.state.report);
        match fs::write(&path, text) {
            Ok(()) => {
                info!(path = %path.display(), "summary exported");
                self.state.status_message = format!("Summary written to {}", path.display());
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to export summary");
                self.state.status_message = format!("Export failed: {}", err);
            }
        }
    }
}

/// Format the component report as a plain-text table
pub fn render_report_text(report: &[SelectedComponent]) -> String {
    let mut out = String::new();
    out.push_str("UMC100.3 Configuration Summary\n");
    out.push_str("==============================\n\n");

    if report.is_empty() {
        out.push_str("No additional components selected.\n");
        return out;
    }

    let label_width = report
        .iter()
        .map(|c| c.label.len())
        .max()
        .unwrap_or(0)
        .max("COMPONENT".len());

    out.push_str(&format!(
        "{:<8} {:<width$} {}\n",
        "SECTION",
        "COMPONENT",
        "ORDER CODE",
        width = label_width
    ));
    for component in report {
        out.push_str(&format!(
            "{:<8} {:<width$} {}\n",
            component.section_id,
            component.label,
            component.order_code,
            width = label_width
        ));
    }

    out.push_str(&format!("\n{} component(s) selected.\n", report.len()));
    out
}
