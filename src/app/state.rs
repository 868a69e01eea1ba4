//! Application state definitions
//!
//! Holds the one `SelectionState` instance the session owns, plus the
//! cursor and mode bookkeeping the rendering layer works from. All
//! selection semantics live in the pure store; the methods here only
//! wire user intent to store transitions.

use crate::catalog::{Catalog, ComponentOption, Section};
use crate::error::ValidationError;
use crate::selection::SelectionState;
use crate::summary::{self, SelectedComponent};

/// Observable application modes
///
/// Transitions: editing -> reviewing on successful summary generation;
/// reviewing -> editing on any selection mutation or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Options are being toggled; no summary is shown
    Editing,
    /// The generated summary table is shown, read-only
    Reviewing,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Immutable component catalog
    pub catalog: Catalog,
    /// Current selections, replaced wholesale on every toggle
    pub selections: SelectionState,
    /// Report captured at the moment validation last succeeded.
    /// Rendered only in [`AppMode::Reviewing`]; any mutation discards it.
    pub report: Vec<SelectedComponent>,
    /// Validation failure to surface in the error banner
    pub error: Option<ValidationError>,
    /// Cursor: section currently in focus
    pub section_index: usize,
    /// Cursor: option currently in focus within that section
    pub option_index: usize,
    /// Status line feedback
    pub status_message: String,
    /// Whether the help overlay is visible
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_catalog(Catalog::builtin())
    }
}

impl AppState {
    /// Create a fresh editing session over the given catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            mode: AppMode::Editing,
            catalog,
            selections: SelectionState::new(),
            report: Vec::new(),
            error: None,
            section_index: 0,
            option_index: 0,
            status_message: "Welcome to the UMC100.3 component selector".to_string(),
            help_visible: false,
        }
    }

    /// Section currently under the cursor
    pub fn current_section(&self) -> Option<&Section> {
        self.catalog.sections.get(self.section_index)
    }

    /// Option currently under the cursor
    pub fn current_option(&self) -> Option<&ComponentOption> {
        self.current_section()
            .and_then(|s| s.options.get(self.option_index))
    }

    /// Move the section cursor forward, wrapping at the end
    pub fn next_section(&mut self) {
        if self.catalog.sections.is_empty() {
            return;
        }
        self.section_index = (self.section_index + 1) % self.catalog.sections.len();
        self.option_index = 0;
    }

    /// Move the section cursor backward, wrapping at the start
    pub fn previous_section(&mut self) {
        if self.catalog.sections.is_empty() {
            return;
        }
        self.section_index = self
            .section_index
            .checked_sub(1)
            .unwrap_or(self.catalog.sections.len() - 1);
        self.option_index = 0;
    }

    /// Move the option cursor down within the current section
    pub fn next_option(&mut self) {
        if let Some(section) = self.current_section() {
            if self.option_index + 1 < section.options.len() {
                self.option_index += 1;
            }
        }
    }

    /// Move the option cursor up within the current section
    pub fn previous_option(&mut self) {
        self.option_index = self.option_index.saturating_sub(1);
    }

    /// Toggle the option under the cursor.
    ///
    /// Any mutation leaves reviewing mode, discards the captured report
    /// and clears a previously shown validation error.
    pub fn toggle_current(&mut self) {
        let Some(section) = self.current_section() else {
            return;
        };
        let Some(option) = section.options.get(self.option_index) else {
            return;
        };

        let section_id = section.id.clone();
        let option_id = option.id.clone();
        let label = option.label.clone();
        let mode = section.mode();

        self.selections = self.selections.toggle(&section_id, &option_id, mode);

        self.mode = AppMode::Editing;
        self.report.clear();
        self.error = None;
        self.status_message = if self.selections.is_selected(&section_id, &option_id) {
            format!("{} selected", label)
        } else {
            format!("{} deselected", label)
        };
    }

    /// Validate the selections and, on success, capture the projected
    /// report and switch to reviewing mode.
    pub fn generate_summary(&mut self) -> Result<(), ValidationError> {
        match summary::validate(&self.selections) {
            Ok(()) => {
                self.report = summary::project(&self.selections, &self.catalog);
                self.mode = AppMode::Reviewing;
                self.error = None;
                self.status_message = format!(
                    "Summary generated: {} component(s) with order codes",
                    self.report.len()
                );
                Ok(())
            }
            Err(err) => {
                self.error = Some(err);
                self.mode = AppMode::Editing;
                self.report.clear();
                self.status_message = "Cannot generate summary".to_string();
                Err(err)
            }
        }
    }

    /// Clear all selections and return to a fresh editing session in
    /// one transition: selections, report, error and mode together.
    pub fn reset(&mut self) {
        self.selections = SelectionState::new();
        self.report.clear();
        self.error = None;
        self.mode = AppMode::Editing;
        self.status_message = "All selections cleared".to_string();
    }

    /// Leave the summary view without touching the selections
    pub fn back_to_editing(&mut self) {
        self.mode = AppMode::Editing;
        self.report.clear();
        self.status_message = "Back to editing".to_string();
    }
}
