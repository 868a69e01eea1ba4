// Kept free of crate-internal imports: build.rs includes this file to
// generate the man page and shell completions from the same definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// umctui - UMC100.3 component selector
#[derive(Parser)]
#[command(name = "umctui")]
#[command(about = "A terminal component selector for the UMC100.3 motor controller family")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive selector (the default)
    Select {
        /// Catalog JSON file to use instead of the built-in UMC100.3 catalog
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Write the generated summary to this file as plain text
        #[arg(short, long)]
        export: Option<PathBuf>,
    },
    /// Validate a catalog file
    Validate {
        /// Path to the catalog JSON file to validate
        catalog: PathBuf,
    },
}
