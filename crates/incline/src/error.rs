//! Error types for Incline operations.
//!
//! The force model and layout engine are total and never fail; errors only
//! arise at the edges: configuration, export, and tutorial interaction.

use std::io;

use thiserror::Error;

use crate::tutorial::TutorialError;

/// The main error type for Incline operations.
#[derive(Debug, Error)]
pub enum InclineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),

    #[error("Tutorial error: {0}")]
    Tutorial(#[from] TutorialError),
}

impl From<crate::export::Error> for InclineError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
