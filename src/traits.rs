//! The seam toward the presentation layer.

use crate::color::Color;
use crate::float_types::Real;
use crate::polygon::Polygon;

/// An external drawing surface.
///
/// The core never touches pixels; it only emits filled, stroked polygon
/// primitives and background clears. Anything that can honor those two
/// commands — an SVG document, a raster canvas, a plotter — can display a
/// partition.
pub trait Surface {
    /// Clear the whole surface to `color`.
    fn clear(&mut self, color: Color);

    /// Draw `polygon`, filled with its fill color and stroked with its
    /// stroke color at the given line weight.
    fn polygon(&mut self, polygon: &Polygon, weight: Real);
}
