//! Diagram export.
//!
//! [`Exporter`] is the seam between a laid-out [`Diagram`] and an output
//! format; [`svg::SvgExporter`] is the only implementation.

pub mod svg;

use std::path::Path;

use thiserror::Error;

use crate::layout::Diagram;

/// Writes a laid-out diagram to a destination.
pub trait Exporter {
    /// Renders `diagram` and writes it to `path`.
    fn export_diagram(&self, diagram: &Diagram, path: &Path) -> Result<(), Error>;
}

/// Errors raised while exporting a diagram.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
