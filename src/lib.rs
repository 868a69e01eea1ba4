//! UMC100.3 Component Selector Library
//!
//! Core selection/summary logic plus the terminal front end for
//! configuring a UMC100.3 motor controller starter.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod selection;
pub mod summary;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use catalog::{
    Catalog, ComponentOption, Section, SelectionMode, MANDATORY_SECTION_ID, NO_ORDER_CODE,
};
pub use error::{SelectorError, ValidationError};
pub use selection::{SectionChoice, SelectionState};
pub use summary::{project, validate, SelectedComponent};
