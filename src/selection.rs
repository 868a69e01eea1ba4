//! Selection state and toggle transitions
//!
//! The selection store is a pure reducer: every transition takes the
//! current state by reference and returns a fresh value, so the caller
//! can compare old and new states cheaply and no partially-updated
//! state is ever observable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::SelectionMode;

/// The selected option(s) of one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionChoice {
    /// Single-select section: the one chosen option id
    Single(String),
    /// Multi-select section: chosen option ids in pick order
    Multiple(Vec<String>),
}

impl SectionChoice {
    /// Whether the given option id is part of this choice
    pub fn contains(&self, option_id: &str) -> bool {
        match self {
            Self::Single(id) => id == option_id,
            Self::Multiple(ids) => ids.iter().any(|id| id == option_id),
        }
    }

    /// Selected option ids, in pick order for multi-select sections
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::Single(id) => vec![id.as_str()],
            Self::Multiple(ids) => ids.iter().map(String::as_str).collect(),
        }
    }

    /// Number of selected options in this choice
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multiple(ids) => ids.len(),
        }
    }

    /// True if no option is selected.
    ///
    /// Never observed through [`SelectionState`]: a section key is
    /// removed as soon as its last option is deselected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// All selections of one configuration session
///
/// Maps section ids to their current choice. A section id is present
/// only while at least one of its options is selected, so "no
/// selection" and "empty set" are the same state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    choices: HashMap<String, SectionChoice>,
}

impl SelectionState {
    /// Create an empty selection state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a toggle for `option_id` in `section_id` and return the
    /// resulting state.
    ///
    /// Single mode: picking the current option deselects it; picking a
    /// different option replaces the previous one. Multiple mode:
    /// picking an unselected option appends it, picking a selected one
    /// removes it, and removing the last one drops the section key.
    ///
    /// Ids are not checked against any catalog here; supplying valid
    /// ids for the section's declared mode is the caller's contract.
    pub fn toggle(&self, section_id: &str, option_id: &str, mode: SelectionMode) -> Self {
        let mut next = self.clone();

        match mode {
            SelectionMode::Multiple => {
                let mut ids = match next.choices.remove(section_id) {
                    Some(SectionChoice::Multiple(ids)) => ids,
                    _ => Vec::new(),
                };
                if let Some(pos) = ids.iter().position(|id| id == option_id) {
                    ids.remove(pos);
                } else {
                    ids.push(option_id.to_string());
                }
                if !ids.is_empty() {
                    next.choices
                        .insert(section_id.to_string(), SectionChoice::Multiple(ids));
                }
            }
            SelectionMode::Single => match next.choices.get(section_id) {
                Some(SectionChoice::Single(current)) if current == option_id => {
                    next.choices.remove(section_id);
                }
                _ => {
                    next.choices.insert(
                        section_id.to_string(),
                        SectionChoice::Single(option_id.to_string()),
                    );
                }
            },
        }

        next
    }

    /// Current choice for a section, if any option is selected
    pub fn section(&self, section_id: &str) -> Option<&SectionChoice> {
        self.choices.get(section_id)
    }

    /// Whether a section has at least one selected option
    pub fn has_section(&self, section_id: &str) -> bool {
        self.choices.contains_key(section_id)
    }

    /// Whether the given option is currently selected in its section
    pub fn is_selected(&self, section_id: &str, option_id: &str) -> bool {
        self.choices
            .get(section_id)
            .is_some_and(|choice| choice.contains(option_id))
    }

    /// Number of selected options in a section (0 if none)
    pub fn selected_count(&self, section_id: &str) -> usize {
        self.choices.get(section_id).map_or(0, SectionChoice::len)
    }

    /// Number of sections with at least one selection
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// True when nothing is selected anywhere
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = SelectionState::new();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
        assert!(!state.has_section("A"));
    }

    #[test]
    fn test_single_select_and_deselect_restores_original() {
        let empty = SelectionState::new();

        let selected = empty.toggle("A", "A1", SelectionMode::Single);
        assert!(selected.is_selected("A", "A1"));
        assert_eq!(selected.section("A"), Some(&SectionChoice::Single("A1".into())));

        let deselected = selected.toggle("A", "A1", SelectionMode::Single);
        assert_eq!(deselected, empty);
        assert!(!deselected.has_section("A"));
    }

    #[test]
    fn test_single_select_replaces_previous() {
        let state = SelectionState::new()
            .toggle("A", "A1", SelectionMode::Single)
            .toggle("A", "A2", SelectionMode::Single);

        assert!(!state.is_selected("A", "A1"));
        assert!(state.is_selected("A", "A2"));
        assert_eq!(state.selected_count("A"), 1);
    }

    #[test]
    fn test_multiple_select_preserves_pick_order() {
        let state = SelectionState::new()
            .toggle("C", "C3", SelectionMode::Multiple)
            .toggle("C", "C1", SelectionMode::Multiple)
            .toggle("C", "C2", SelectionMode::Multiple);

        let choice = state.section("C").unwrap();
        assert_eq!(choice.ids(), vec!["C3", "C1", "C2"]);
    }

    #[test]
    fn test_multiple_deselect_removes_only_that_option() {
        let state = SelectionState::new()
            .toggle("C", "C1", SelectionMode::Multiple)
            .toggle("C", "C2", SelectionMode::Multiple)
            .toggle("C", "C3", SelectionMode::Multiple)
            .toggle("C", "C2", SelectionMode::Multiple);

        let choice = state.section("C").unwrap();
        assert_eq!(choice.ids(), vec!["C1", "C3"]);
    }

    #[test]
    fn test_multiple_deselecting_last_option_drops_section() {
        let empty = SelectionState::new();
        let state = empty
            .toggle("C", "C1", SelectionMode::Multiple)
            .toggle("C", "C1", SelectionMode::Multiple);

        assert_eq!(state, empty);
        assert!(!state.has_section("C"));
    }

    #[test]
    fn test_toggle_does_not_mutate_previous_state() {
        let before = SelectionState::new().toggle("A", "A1", SelectionMode::Single);
        let snapshot = before.clone();

        let _after = before.toggle("A", "A2", SelectionMode::Single);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_sections_are_independent() {
        let state = SelectionState::new()
            .toggle("A", "A1", SelectionMode::Single)
            .toggle("C", "C1", SelectionMode::Multiple);

        assert_eq!(state.len(), 2);

        let state = state.toggle("C", "C1", SelectionMode::Multiple);
        assert!(state.has_section("A"));
        assert!(!state.has_section("C"));
    }
}
