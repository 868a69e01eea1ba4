// Integration tests for umctui
//
// These exercise the public library API end to end: the selection
// store, summary validation/projection, the application state machine,
// and catalog file handling.

use umctui::app::{AppMode, AppState};
use umctui::catalog::{Catalog, ComponentOption, Section, SelectionMode, NO_ORDER_CODE};
use umctui::error::ValidationError;
use umctui::selection::SelectionState;
use umctui::{project, validate};

/// Catalog used by the configuration walkthrough below: a mandatory
/// single-select base section and a multi-select extension section.
fn walkthrough_catalog() -> Catalog {
    Catalog {
        sections: vec![
            Section {
                id: "A".to_string(),
                title: "Base Controller".to_string(),
                question: "Which base controller?".to_string(),
                is_multiple: false,
                is_optional: false,
                options: vec![
                    ComponentOption::mandatory("A1", "Controller", "With order code", "X1"),
                    ComponentOption::mandatory("A2", "Placeholder", "No order code", NO_ORDER_CODE),
                ],
            },
            Section {
                id: "B".to_string(),
                title: "Extensions".to_string(),
                question: "Which extensions?".to_string(),
                is_multiple: true,
                is_optional: true,
                options: vec![
                    ComponentOption::new("B1", "Module one", "First module", "Y1"),
                    ComponentOption::new("B2", "Module two", "Second module", "Y2"),
                ],
            },
        ],
    }
}

#[test]
fn test_full_configuration_walkthrough() {
    let catalog = walkthrough_catalog();

    // Select the base controller, then both extension modules.
    let state = SelectionState::new()
        .toggle("A", "A1", SelectionMode::Single)
        .toggle("B", "B1", SelectionMode::Multiple)
        .toggle("B", "B2", SelectionMode::Multiple);

    assert_eq!(validate(&state), Ok(()));
    let components = project(&state, &catalog);
    let codes: Vec<&str> = components.iter().map(|c| c.order_code.as_str()).collect();
    assert_eq!(codes, vec!["X1", "Y1", "Y2"]);

    // Deselecting B1 keeps the rest in place.
    let state = state.toggle("B", "B1", SelectionMode::Multiple);
    let components = project(&state, &catalog);
    let codes: Vec<&str> = components.iter().map(|c| c.order_code.as_str()).collect();
    assert_eq!(codes, vec!["X1", "Y2"]);

    // After a reset nothing is selected, nothing projects, and
    // validation fails again.
    let state = SelectionState::new();
    assert!(project(&state, &catalog).is_empty());
    assert_eq!(validate(&state), Err(ValidationError::MissingMandatorySection));
}

#[test]
fn test_summary_generation_through_app_state() {
    let mut state = AppState::with_catalog(walkthrough_catalog());

    // Generating without the base controller fails and surfaces the error.
    assert!(state.generate_summary().is_err());
    assert_eq!(state.mode, AppMode::Editing);
    assert_eq!(state.error, Some(ValidationError::MissingMandatorySection));

    // Select the base controller via the cursor and generate.
    state.toggle_current(); // A1 is under the cursor initially
    assert!(state.error.is_none(), "mutation clears the error");
    state.generate_summary().expect("base controller is selected");
    assert_eq!(state.mode, AppMode::Reviewing);
    assert_eq!(state.report.len(), 1);
    assert_eq!(state.report[0].order_code, "X1");

    // Any further mutation returns to editing and discards the report.
    state.toggle_current();
    assert_eq!(state.mode, AppMode::Editing);
    assert!(state.report.is_empty());
}

#[test]
fn test_empty_summary_is_representable() {
    let mut state = AppState::with_catalog(walkthrough_catalog());

    // A2 satisfies validation but carries no order code.
    state.next_option();
    state.toggle_current();
    state.generate_summary().expect("mandatory section is covered");

    assert_eq!(state.mode, AppMode::Reviewing);
    assert!(state.report.is_empty());
}

#[test]
fn test_reset_is_one_atomic_transition() {
    let mut state = AppState::with_catalog(walkthrough_catalog());
    state.toggle_current();
    state.generate_summary().unwrap();

    state.reset();
    assert_eq!(state.mode, AppMode::Editing);
    assert!(state.selections.is_empty());
    assert!(state.report.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn test_builtin_catalog_selector_flow() {
    let mut state = AppState::default();

    // Builtin catalog: A1 (base controller) and one I/O module.
    state.toggle_current();
    let io_section = state
        .catalog
        .sections
        .iter()
        .position(|s| s.id == "C")
        .expect("builtin catalog has an I/O section");
    while state.section_index != io_section {
        state.next_section();
    }
    state.toggle_current();

    state.generate_summary().expect("valid configuration");
    assert_eq!(state.report.len(), 2);
    assert_eq!(state.report[0].section_id, "A");
    assert_eq!(state.report[1].section_id, "C");

    let text = umctui::app::render_report_text(&state.report);
    assert!(text.contains(&state.report[0].order_code));
    assert!(text.contains(&state.report[1].order_code));
    assert!(text.contains("2 component(s) selected."));
}

#[test]
fn test_catalog_file_roundtrip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("catalog.json");

    let catalog = Catalog::builtin();
    catalog.save_to_file(&path).expect("save catalog");

    let loaded = Catalog::load_from_file(&path).expect("load catalog");
    assert_eq!(catalog, loaded);
    loaded.validate().expect("loaded catalog validates");
}

#[test]
fn test_catalog_load_rejects_malformed_json() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").expect("write file");

    assert!(Catalog::load_from_file(&path).is_err());
}

#[test]
fn test_catalog_load_missing_file_mentions_path() {
    let err = Catalog::load_from_file("/nonexistent/catalog.json").unwrap_err();
    assert!(format!("{err:#}").contains("catalog"));
}
