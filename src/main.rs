//! umctui - Main entry point
//!
//! A terminal component selector for the UMC100.3 motor controller
//! family: pick a base controller and its options, then generate the
//! order-code summary.

use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use umctui::app::{App, AppState};
use umctui::catalog::Catalog;
use umctui::cli::{Cli, Commands};
use umctui::error::SelectorError;

/// Initialize tracing with appropriate settings.
///
/// Logs go to stderr so they never mix with the alternate screen; the
/// RUST_LOG env var overrides the default filter.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("umctui starting up");

    let cli = Cli::parse();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { catalog }) => {
            info!("validating catalog file: {:?}", catalog);
            match Catalog::load_from_file(&catalog) {
                Ok(loaded) => match loaded.validate() {
                    Ok(()) => {
                        info!("catalog validation successful");
                        println!(
                            "✓ Catalog file is valid: {} section(s)",
                            loaded.sections.len()
                        );
                    }
                    Err(e) => {
                        error!("catalog validation failed: {e:#}");
                        eprintln!("✗ Catalog validation failed: {e:#}");
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("failed to load catalog file: {e:#}");
                    eprintln!("✗ Failed to load catalog file: {e:#}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Select { catalog, export }) => {
            run_selector(catalog.as_deref(), export)?;
        }
        None => {
            info!("no command specified, launching selector");
            run_selector(None, None)?;
        }
    }

    Ok(())
}

/// Load the catalog to work over, defaulting to the built-in one
fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::load_from_file(path)?;
            catalog.validate()?;
            info!(
                path = %path.display(),
                sections = catalog.sections.len(),
                "catalog loaded"
            );
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Run the interactive selector
fn run_selector(
    catalog_path: Option<&Path>,
    export: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(catalog_path)?;

    // Initialize terminal
    enable_raw_mode()
        .map_err(|e| SelectorError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| SelectorError::terminal(format!("Failed to enter alternate screen: {}", e)))?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| SelectorError::terminal(format!("Failed to create terminal: {}", e)))?;

    // Create and run application
    let mut app = App::new(AppState::with_catalog(catalog), export);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}
