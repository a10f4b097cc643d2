//! Stock shapes used to seed a partition.

use crate::color::Color;
use crate::errors::ValidationError;
use crate::float_types::{Real, TAU};
use crate::polygon::{Point, Polygon};

impl Polygon {
    /// Axis-aligned rectangle spanning `(0, 0)` to `(width, height)`.
    pub fn rectangle(
        width: Real,
        height: Real,
        fill: Color,
        stroke: Color,
    ) -> Result<Self, ValidationError> {
        Polygon::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(width, 0.0),
                Point::new(width, height),
                Point::new(0.0, height),
            ],
            fill,
            stroke,
        )
    }

    /// Regular n-gon inscribed in the circle of `radius` around `center`,
    /// walked clockwise starting at angle `rotation`.
    ///
    /// Fails with [`ValidationError::InvalidGeometry`] for `sides < 3`.
    pub fn regular_ngon(
        sides: usize,
        radius: Real,
        center: Point,
        rotation: Real,
        fill: Color,
        stroke: Color,
    ) -> Result<Self, ValidationError> {
        let mut vertices = Vec::with_capacity(sides);
        for i in 0..sides {
            let phi = rotation + TAU * i as Real / sides as Real;
            vertices.push(Point::new(
                radius * (-phi).cos() + center.x,
                radius * (-phi).sin() + center.y,
            ));
        }
        Polygon::new(vertices, fill, stroke)
    }
}
