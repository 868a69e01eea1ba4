//! Component catalog for the UMC100.3 device family
//!
//! Holds the immutable section/option records the selector works over,
//! the built-in UMC100.3 catalog, and JSON load/save for site-specific
//! catalog files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::{Display, EnumIter, EnumString};

/// Order code sentinel meaning "not a purchasable/listed component".
///
/// Options carrying this code are selectable but never appear in the
/// generated summary.
pub const NO_ORDER_CODE: &str = "N/A";

/// The one section that must have a selection before a summary can be
/// generated. Section "A" (base controller) by catalog convention.
pub const MANDATORY_SECTION_ID: &str = "A";

/// Selection behavior of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SelectionMode {
    /// At most one option selected; selecting another replaces it
    #[strum(serialize = "single")]
    Single,
    /// Any number of options selected, tracked in pick order
    #[strum(serialize = "multiple")]
    Multiple,
}

/// One selectable component or configuration choice within a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOption {
    /// Identifier, unique within its section (e.g. "A1")
    pub id: String,
    /// Display name of the component
    pub label: String,
    /// One-line description shown next to the option
    pub description: String,
    /// Catalog order code (style number), or [`NO_ORDER_CODE`]
    pub order_code: String,
    /// Whether this option belongs to the mandatory section
    #[serde(default)]
    pub is_mandatory: bool,
}

impl ComponentOption {
    /// Create a new catalog option
    pub fn new(id: &str, label: &str, description: &str, order_code: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            order_code: order_code.to_string(),
            is_mandatory: false,
        }
    }

    /// Create an option flagged as part of the mandatory section
    pub fn mandatory(id: &str, label: &str, description: &str, order_code: &str) -> Self {
        Self {
            is_mandatory: true,
            ..Self::new(id, label, description, order_code)
        }
    }

    /// Whether this option carries a real order code and therefore
    /// appears in generated summaries
    pub fn is_orderable(&self) -> bool {
        self.order_code != NO_ORDER_CODE
    }
}

/// A named group of mutually related options, single- or multi-select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Globally unique section identifier (e.g. "A")
    pub id: String,
    /// Section heading
    pub title: String,
    /// Prompt shown above the options
    pub question: String,
    /// Whether more than one option may be selected
    pub is_multiple: bool,
    /// Options in catalog order
    pub options: Vec<ComponentOption>,
    /// Whether the section may be left without any selection
    #[serde(default)]
    pub is_optional: bool,
}

impl Section {
    /// Selection mode of this section as an explicit tag
    pub fn mode(&self) -> SelectionMode {
        if self.is_multiple {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        }
    }

    /// Look up an option by id within this section
    pub fn option(&self, option_id: &str) -> Option<&ComponentOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// Ordered, immutable catalog of sections for one device family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Sections in display and summary order
    pub sections: Vec<Section>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Built-in catalog for the UMC100.3 universal motor controller family
    pub fn builtin() -> Self {
        Self {
            sections: vec![
                Section {
                    id: "A".to_string(),
                    title: "SECTION A: Base Controller".to_string(),
                    question: "Which base controller does the starter require?".to_string(),
                    is_multiple: false,
                    is_optional: false,
                    options: vec![
                        ComponentOption::mandatory(
                            "A1",
                            "UMC100.3 UC",
                            "Universal motor controller, 24 V DC control supply",
                            "1SAJ530000R0100",
                        ),
                        ComponentOption::mandatory(
                            "A2",
                            "UMC100.3 DC",
                            "Universal motor controller, 110-240 V AC/DC control supply",
                            "1SAJ530000R0200",
                        ),
                        ComponentOption::mandatory(
                            "A3",
                            "UMC100.3 UC ATEX",
                            "Base controller certified for Ex e motor protection",
                            "1SAJ532000R0100",
                        ),
                    ],
                },
                Section {
                    id: "B".to_string(),
                    title: "SECTION B: Communication Interface".to_string(),
                    question: "How will the controller connect to the control system?"
                        .to_string(),
                    is_multiple: false,
                    is_optional: false,
                    options: vec![
                        ComponentOption::new(
                            "B1",
                            "MRP21-FBP",
                            "Modbus RTU communication interface",
                            "1SAJ251000R0001",
                        ),
                        ComponentOption::new(
                            "B2",
                            "PDQ22-FBP",
                            "PROFIBUS DP communication interface, 4 starters per node",
                            "1SAJ252000R0001",
                        ),
                        ComponentOption::new(
                            "B3",
                            "EIU32.0",
                            "EtherNet/IP communication interface",
                            "1SAJ260000R0100",
                        ),
                        ComponentOption::new(
                            "B4",
                            "PNQ22.0",
                            "PROFINET IO communication interface, redundant ports",
                            "1SAJ262000R0100",
                        ),
                        ComponentOption::new(
                            "B5",
                            "Stand-alone operation",
                            "No fieldbus connection, local control only",
                            NO_ORDER_CODE,
                        ),
                    ],
                },
                Section {
                    id: "C".to_string(),
                    title: "SECTION C: I/O Expansion Modules".to_string(),
                    question: "Which additional I/O does the application need?".to_string(),
                    is_multiple: true,
                    is_optional: true,
                    options: vec![
                        ComponentOption::new(
                            "C1",
                            "DX111-FBP",
                            "Digital expansion module, 8 DI / 4 DO / 1 AO",
                            "1SAJ611000R0101",
                        ),
                        ComponentOption::new(
                            "C2",
                            "DX122-FBP",
                            "Digital expansion module with relay outputs",
                            "1SAJ612000R0101",
                        ),
                        ComponentOption::new(
                            "C3",
                            "AI111.0",
                            "Analog input module, 3 channels, PT100/PT1000",
                            "1SAJ613000R0101",
                        ),
                        ComponentOption::new(
                            "C4",
                            "VI150.0",
                            "Voltage module for mains monitoring, 150-690 V",
                            "1SAJ620000R0101",
                        ),
                        ComponentOption::new(
                            "C5",
                            "VI155.0",
                            "Voltage module with earth-fault detection",
                            "1SAJ621000R0101",
                        ),
                    ],
                },
                Section {
                    id: "D".to_string(),
                    title: "SECTION D: Operator Panel".to_string(),
                    question: "Is local operation and diagnosis required?".to_string(),
                    is_multiple: false,
                    is_optional: true,
                    options: vec![
                        ComponentOption::new(
                            "D1",
                            "UMC100-PAN",
                            "LCD control panel with diagnosis display",
                            "1SAJ590000R0103",
                        ),
                        ComponentOption::new(
                            "D2",
                            "UMC100-PAN + door kit",
                            "LCD panel with IP54 cabinet-door mounting kit",
                            "1SAJ590000R0203",
                        ),
                        ComponentOption::new(
                            "D3",
                            "No panel",
                            "Operation via fieldbus or hardwired inputs only",
                            NO_ORDER_CODE,
                        ),
                    ],
                },
                Section {
                    id: "E".to_string(),
                    title: "SECTION E: Accessories".to_string(),
                    question: "Which mounting and connection accessories are needed?"
                        .to_string(),
                    is_multiple: true,
                    is_optional: true,
                    options: vec![
                        ComponentOption::new(
                            "E1",
                            "CDP11-FBP",
                            "Panel connection cable, 0.5 m",
                            "1SAJ510001R0001",
                        ),
                        ComponentOption::new(
                            "E2",
                            "CDP12-FBP",
                            "Panel connection cable, 2.0 m",
                            "1SAJ510001R0002",
                        ),
                        ComponentOption::new(
                            "E3",
                            "MEM100.0",
                            "Removable configuration memory card",
                            "1SAJ650000R0001",
                        ),
                        ComponentOption::new(
                            "E4",
                            "UMC100-XS",
                            "Screw terminal adapter set for cabinet wiring",
                            "1SAJ655000R0001",
                        ),
                    ],
                },
            ],
        }
    }

    /// Look up a section by id
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        Ok(catalog)
    }

    /// Save a catalog to a JSON file
    #[allow(dead_code)] // API: used to seed site-specific catalog files
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Validate catalog integrity
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            anyhow::bail!("Catalog has no sections");
        }

        let mut seen_sections = std::collections::HashSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                anyhow::bail!("Section with empty id");
            }
            if !seen_sections.insert(&section.id) {
                anyhow::bail!("Duplicate section id: {}", section.id);
            }
            if section.options.is_empty() {
                anyhow::bail!("Section {} has no options", section.id);
            }

            let mut seen_options = std::collections::HashSet::new();
            for option in &section.options {
                if option.id.trim().is_empty() {
                    anyhow::bail!("Section {} has an option with empty id", section.id);
                }
                if !seen_options.insert(&option.id) {
                    anyhow::bail!(
                        "Duplicate option id {} in section {}",
                        option.id,
                        section.id
                    );
                }
                if option.order_code.trim().is_empty() {
                    anyhow::bail!(
                        "Option {} in section {} has an empty order code (use \"{}\")",
                        option.id,
                        section.id,
                        NO_ORDER_CODE
                    );
                }
            }
        }

        if self.section(MANDATORY_SECTION_ID).is_none() {
            anyhow::bail!(
                "Catalog is missing the mandatory section \"{}\"",
                MANDATORY_SECTION_ID
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        catalog.validate().expect("built-in catalog should validate");
    }

    #[test]
    fn test_builtin_has_mandatory_section_first() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.sections[0].id, MANDATORY_SECTION_ID);
        assert_eq!(catalog.sections[0].mode(), SelectionMode::Single);
        assert!(catalog.sections[0].options.iter().all(|o| o.is_mandatory));
    }

    #[test]
    fn test_section_and_option_lookup() {
        let catalog = Catalog::builtin();
        let section = catalog.section("C").expect("section C exists");
        assert_eq!(section.mode(), SelectionMode::Multiple);

        let option = section.option("C3").expect("option C3 exists");
        assert_eq!(option.label, "AI111.0");
        assert!(option.is_orderable());

        assert!(catalog.section("Z").is_none());
        assert!(section.option("C99").is_none());
    }

    #[test]
    fn test_no_order_code_sentinel() {
        let catalog = Catalog::builtin();
        let standalone = catalog.section("B").unwrap().option("B5").unwrap();
        assert_eq!(standalone.order_code, NO_ORDER_CODE);
        assert!(!standalone.is_orderable());
    }

    #[test]
    fn test_selection_mode_roundtrip() {
        assert_eq!(SelectionMode::Single.to_string(), "single");
        assert_eq!(
            SelectionMode::from_str("multiple").unwrap(),
            SelectionMode::Multiple
        );
    }

    #[test]
    fn test_catalog_serde_roundtrip() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog, parsed);
    }

    #[test]
    fn test_catalog_json_uses_original_field_names() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("\"orderCode\""));
        assert!(json.contains("\"isMultiple\""));
    }

    #[test]
    fn test_validate_rejects_duplicate_section_ids() {
        let mut catalog = Catalog::builtin();
        let mut dup = catalog.sections[1].clone();
        dup.id = "A".to_string();
        catalog.sections.push(dup);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_mandatory_section() {
        let mut catalog = Catalog::builtin();
        catalog.sections.retain(|s| s.id != MANDATORY_SECTION_ID);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("mandatory section"));
    }
}
