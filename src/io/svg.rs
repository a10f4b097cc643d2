//! SVG drawing surface: records drawing commands into an `svg::Document`.

use crate::color::Color;
use crate::float_types::Real;
use crate::io::IoError;
use crate::polygon::Polygon;
use crate::traits::Surface;
use std::path::Path;
use svg::Document;
use svg::node::element::{Polygon as SvgPolygon, Rectangle};

/// A [`Surface`] backed by an SVG document.
///
/// Drawing commands append elements in call order, so later shapes paint
/// over earlier ones exactly as on an immediate-mode canvas. Colors are
/// written in the `#rrggbbaa` textual form.
pub struct SvgSurface {
    document: Document,
    width: Real,
    height: Real,
}

impl SvgSurface {
    /// An empty document of the given pixel dimensions.
    pub fn new(width: Real, height: Real) -> Self {
        let document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height));
        SvgSurface {
            document,
            width,
            height,
        }
    }

    /// The accumulated document.
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Write the accumulated document to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), IoError> {
        svg::save(path, &self.document)?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, color: Color) {
        let backdrop = Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", self.width)
            .set("height", self.height)
            .set("fill", color.to_hex());
        let document = std::mem::replace(&mut self.document, Document::new());
        self.document = document.add(backdrop);
    }

    fn polygon(&mut self, polygon: &Polygon, weight: Real) {
        let points = polygon
            .vertices
            .iter()
            .map(|v| format!("{},{}", v.x, v.y))
            .collect::<Vec<_>>()
            .join(" ");
        let element = SvgPolygon::new()
            .set("points", points)
            .set("fill", polygon.fill.to_hex())
            .set("stroke", polygon.stroke.to_hex())
            .set("stroke-width", weight);
        let document = std::mem::replace(&mut self.document, Document::new());
        self.document = document.add(element);
    }
}
