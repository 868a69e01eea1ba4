//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - Editing/Reviewing transitions
//! - Cursor navigation bounds

use umctui::app::{AppMode, AppState};
use umctui::catalog::MANDATORY_SECTION_ID;

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_mode_is_editing() {
    let state = AppState::default();
    assert_eq!(state.mode, AppMode::Editing);
}

#[test]
fn test_app_state_default_has_welcome_message() {
    let state = AppState::default();
    assert!(state.status_message.contains("Welcome"));
}

#[test]
fn test_app_state_default_cursors_are_zero() {
    let state = AppState::default();
    assert_eq!(state.section_index, 0);
    assert_eq!(state.option_index, 0);
}

#[test]
fn test_app_state_default_help_not_visible() {
    let state = AppState::default();
    assert!(!state.help_visible);
}

#[test]
fn test_app_state_default_has_no_selections_or_report() {
    let state = AppState::default();
    assert!(state.selections.is_empty());
    assert!(state.report.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn test_app_state_default_catalog_starts_at_mandatory_section() {
    let state = AppState::default();
    let section = state.current_section().expect("catalog has sections");
    assert_eq!(section.id, MANDATORY_SECTION_ID);
}

// =============================================================================
// Mode Transition Tests
// =============================================================================

#[test]
fn test_generate_without_mandatory_selection_sets_error() {
    let mut state = AppState::default();
    assert!(state.generate_summary().is_err());
    assert_eq!(state.mode, AppMode::Editing);
    assert!(state.error.is_some());
}

#[test]
fn test_generate_with_mandatory_selection_enters_reviewing() {
    let mut state = AppState::default();
    state.toggle_current();
    assert!(state.generate_summary().is_ok());
    assert_eq!(state.mode, AppMode::Reviewing);
    assert!(state.error.is_none());
}

#[test]
fn test_mutation_in_reviewing_returns_to_editing() {
    let mut state = AppState::default();
    state.toggle_current();
    state.generate_summary().unwrap();

    state.toggle_current();
    assert_eq!(state.mode, AppMode::Editing);
    assert!(state.report.is_empty());
}

#[test]
fn test_back_to_editing_keeps_selections() {
    let mut state = AppState::default();
    state.toggle_current();
    state.generate_summary().unwrap();

    state.back_to_editing();
    assert_eq!(state.mode, AppMode::Editing);
    assert!(!state.selections.is_empty());
}

#[test]
fn test_reset_returns_to_initial_shape() {
    let mut state = AppState::default();
    state.toggle_current();
    state.generate_summary().unwrap();

    state.reset();
    assert_eq!(state.mode, AppMode::Editing);
    assert!(state.selections.is_empty());
    assert!(state.report.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn test_toggle_clears_pending_error() {
    let mut state = AppState::default();
    assert!(state.generate_summary().is_err());
    assert!(state.error.is_some());

    state.toggle_current();
    assert!(state.error.is_none());
}

// =============================================================================
// Cursor Navigation Tests
// =============================================================================

#[test]
fn test_next_section_wraps_around() {
    let mut state = AppState::default();
    let count = state.catalog.sections.len();

    for _ in 0..count {
        state.next_section();
    }
    assert_eq!(state.section_index, 0);
}

#[test]
fn test_previous_section_wraps_backward() {
    let mut state = AppState::default();
    state.previous_section();
    assert_eq!(state.section_index, state.catalog.sections.len() - 1);
}

#[test]
fn test_section_change_resets_option_cursor() {
    let mut state = AppState::default();
    state.next_option();
    assert_eq!(state.option_index, 1);

    state.next_section();
    assert_eq!(state.option_index, 0);
}

#[test]
fn test_option_cursor_clamps_at_bounds() {
    let mut state = AppState::default();
    state.previous_option();
    assert_eq!(state.option_index, 0);

    let options = state.current_section().unwrap().options.len();
    for _ in 0..options + 5 {
        state.next_option();
    }
    assert_eq!(state.option_index, options - 1);
}

#[test]
fn test_toggle_current_selects_option_under_cursor() {
    let mut state = AppState::default();
    state.toggle_current();

    let section = state.current_section().unwrap();
    assert!(state.selections.is_selected(&section.id, &section.options[0].id));

    state.toggle_current();
    assert!(state.selections.is_empty());
}
