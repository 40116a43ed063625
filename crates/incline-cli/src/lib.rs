//! CLI logic for the Incline diagram tool.
//!
//! This module contains the core CLI logic: loading a scenario and the
//! configuration, rendering the diagram, and printing the equations.

pub mod error_adapter;

mod args;
mod config;
mod scenario;

pub use args::Args;
pub use config::ConfigError;
pub use scenario::ScenarioError;

use std::fs;

use log::info;
use thiserror::Error;

use incline::{DiagramBuilder, InclineError};

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Incline(#[from] InclineError),
}

/// Run the Incline CLI application
///
/// This function loads the scenario, renders it through the Incline
/// pipeline, and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Scenario loading errors
/// - Rendering and file I/O errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scenario"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let params = scenario::load_scenario(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    if args.equations {
        println!("{}", builder.equations(&params));
    }

    let svg = builder.render_svg(&params)?;
    fs::write(&args.output, svg).map_err(InclineError::from)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
