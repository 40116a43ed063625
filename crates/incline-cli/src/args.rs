//! Command-line argument definitions for the Incline CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the scenario and output paths,
//! configuration file selection, logging verbosity, and whether the
//! equilibrium equations are printed.

use clap::Parser;

/// Command-line arguments for the Incline diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the scenario file (TOML)
    #[arg(help = "Path to the scenario file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the equilibrium equations to stdout
    #[arg(long)]
    pub equations: bool,
}
