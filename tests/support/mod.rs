//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)] // each integration-test binary uses its own subset

use polyfract::color::Color;
use polyfract::float_types::Real;
use polyfract::polygon::{Point, Polygon};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Helper to make a polygon from raw coordinate pairs with stock colors.
pub fn make_polygon(points: &[[Real; 2]]) -> Polygon {
    let vertices = points.iter().map(|p| Point::new(p[0], p[1])).collect();
    Polygon::new(vertices, Color::BLACK, Color::WHITE).expect("at least 3 vertices")
}

/// The 100x100 square most tree tests partition.
pub fn unit_square() -> Polygon {
    make_polygon(&[[0.0, 0.0], [0.0, 100.0], [100.0, 100.0], [100.0, 0.0]])
}

/// Signed shoelace area (positive for counter-clockwise vertex order).
pub fn shoelace_area(vertices: &[Point]) -> Real {
    let n = vertices.len();
    let mut sum = 0.0;
    for (i, v) in vertices.iter().enumerate() {
        let w = &vertices[(i + 1) % n];
        sum += v.x * w.y - w.x * v.y;
    }
    sum / 2.0
}

/// Reference containment for convex polygons: inside iff the point sits
/// strictly on the same side of every directed edge.
pub fn convex_contains(polygon: &Polygon, point: &Point) -> bool {
    let mut sign = 0.0;
    for edge in &polygon.edges {
        let cross = (edge[1].x - edge[0].x) * (point.y - edge[0].y)
            - (edge[1].y - edge[0].y) * (point.x - edge[0].x);
        if cross == 0.0 {
            // on the carrying line; callers keep query points off edges
            return false;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if sign != cross.signum() {
            return false;
        }
    }
    true
}

/// Distance from `point` to the closest point of the polygon's boundary.
pub fn distance_to_boundary(polygon: &Polygon, point: &Point) -> Real {
    polygon
        .edges
        .iter()
        .map(|edge| distance_to_segment(point, &edge[0], &edge[1]))
        .fold(Real::MAX, Real::min)
}

fn distance_to_segment(point: &Point, a: &Point, b: &Point) -> Real {
    let ab = (b.x - a.x, b.y - a.y);
    let ap = (point.x - a.x, point.y - a.y);
    let len2 = ab.0 * ab.0 + ab.1 * ab.1;
    let t = if len2 == 0.0 {
        0.0
    } else {
        ((ap.0 * ab.0 + ap.1 * ab.1) / len2).clamp(0.0, 1.0)
    };
    let closest = Point::new(a.x + t * ab.0, a.y + t * ab.1);
    nalgebra::distance(point, &closest)
}
