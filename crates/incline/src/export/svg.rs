//! SVG export of laid-out diagrams.
//!
//! Every primitive renders into a [`LayeredOutput`]; the merged output emits
//! one `<g data-layer=…>` group per layer in bottom-to-top order, so labels
//! are always drawn above force vectors regardless of primitive order.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element::Rectangle};

use incline_core::{color::Color, draw::LayeredOutput, draw::RenderLayer};

use crate::{
    export::{self, Exporter},
    layout::Diagram,
};

/// Renders [`Diagram`]s to SVG documents.
///
/// # Examples
///
/// ```
/// # use incline::export::svg::SvgExporter;
/// # use incline::DiagramBuilder;
/// # use incline_core::params::ParameterSet;
/// let builder = DiagramBuilder::default();
/// let params = ParameterSet::default().with_angle(30.0).with_weight_panel(true);
/// let diagram = builder.layout(&params);
///
/// let svg = SvgExporter::new().render_to_string(&diagram);
/// assert!(svg.contains("R_N=84.9N"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    background_color: Option<Color>,
}

impl SvgExporter {
    /// Creates an exporter with a transparent background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background fill.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Builds the SVG document of `diagram`.
    pub fn render_document(&self, diagram: &Diagram) -> Document {
        let canvas = diagram.canvas();
        let mut output = LayeredOutput::new();

        if let Some(color) = &self.background_color {
            let background = Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", canvas.width())
                .set("height", canvas.height())
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
            output.add_to_layer(RenderLayer::Background, Box::new(background));
        }

        for primitive in diagram.primitives() {
            output.merge(primitive.render_to_layers());
        }

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", canvas.width(), canvas.height()),
            )
            .set("width", canvas.width())
            .set("height", canvas.height());

        for node in output.render() {
            doc = doc.add(node);
        }

        debug!(primitives = diagram.primitives().len(); "SVG document rendered");
        doc
    }

    /// Renders `diagram` to an SVG string.
    pub fn render_to_string(&self, diagram: &Diagram) -> String {
        self.render_document(diagram).to_string()
    }

    /// Renders `diagram` and writes it to `path`.
    pub fn write_to_file(&self, diagram: &Diagram, path: &Path) -> Result<(), export::Error> {
        let doc = self.render_document(diagram);
        info!(path:? = path; "Creating SVG file");

        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(path:? = path, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(file, "{doc}") {
            error!(path:? = path, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl Exporter for SvgExporter {
    fn export_diagram(&self, diagram: &Diagram, path: &Path) -> Result<(), export::Error> {
        self.write_to_file(diagram, path)
    }
}
