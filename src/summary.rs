//! Summary projection over the selection state
//!
//! Validation and projection are pure reads: the ordered component
//! list is recomputed from state + catalog on every call and never
//! cached, so there is no derived state to keep consistent.

use tracing::debug;

use crate::catalog::{Catalog, MANDATORY_SECTION_ID};
use crate::error::ValidationError;
use crate::selection::SelectionState;

/// One row of the generated order summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedComponent {
    /// Section the component was chosen from
    pub section_id: String,
    /// Option id within that section
    pub option_id: String,
    /// Component display name
    pub label: String,
    /// Component description
    pub description: String,
    /// Catalog order code (never the "N/A" sentinel)
    pub order_code: String,
}

/// Check that a summary may be generated from this state.
///
/// The base controller section is the only one that must be chosen;
/// every other section may be left empty.
pub fn validate(state: &SelectionState) -> Result<(), ValidationError> {
    if state.has_section(MANDATORY_SECTION_ID) {
        Ok(())
    } else {
        Err(ValidationError::MissingMandatorySection)
    }
}

/// Project the selection state into the ordered component list.
///
/// Sections appear in catalog order; within a multi-select section,
/// components appear in the order they were picked. Options without a
/// real order code are excluded. Selected ids that no longer resolve
/// against the catalog are skipped, not fatal — a stale selection must
/// not take down summary generation.
///
/// An empty result is valid: a configuration can consist of the base
/// controller alone once that option carries no order code.
pub fn project(state: &SelectionState, catalog: &Catalog) -> Vec<SelectedComponent> {
    let mut components = Vec::new();

    for section in &catalog.sections {
        let Some(choice) = state.section(&section.id) else {
            continue;
        };

        for option_id in choice.ids() {
            match section.option(option_id) {
                Some(option) if option.is_orderable() => {
                    components.push(SelectedComponent {
                        section_id: section.id.clone(),
                        option_id: option.id.clone(),
                        label: option.label.clone(),
                        description: option.description.clone(),
                        order_code: option.order_code.clone(),
                    });
                }
                Some(_) => {} // "N/A" sentinel, selectable but never listed
                None => {
                    debug!(
                        section = %section.id,
                        option = option_id,
                        "selected option does not resolve against the catalog, skipping"
                    );
                }
            }
        }
    }

    components
}
