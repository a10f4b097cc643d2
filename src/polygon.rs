//! Simple polygons and the line-cutting routines the partition tree is
//! built on: edge derivation, ray-cast containment, per-edge line
//! intersection, and splitting along an arbitrary chord.

use crate::color::Color;
use crate::errors::ValidationError;
use crate::float_types::Real;
use nalgebra::{Point2, distance_squared};

/// A point in the plane. Doubles as a polygon vertex and as a sampled data
/// point inserted into a [`PolyTree`](crate::tree::PolyTree).
pub type Point = Point2<Real>;

/// A polygon edge: two adjacent vertices, in vertex-list order.
pub type Edge = [Point; 2];

/// Returned by [`Polygon::split`] when the cutting line crosses fewer than
/// two edges (tangent to, or parallel with, the polygon). A routine
/// outcome, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsplittable;

/// An n-sided simple polygon: at least 3 vertices sorted by adjacency and
/// implicitly closed, plus the fill and stroke colors it is rendered with.
///
/// The edge list is derived once at construction and always satisfies
/// `edges[i] == [vertices[i], vertices[(i + 1) % n]]`. A polygon is never
/// mutated after construction; splitting produces two fresh ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Vertices in adjacency order; the last connects back to the first.
    pub vertices: Vec<Point>,
    /// One edge per vertex, in the same order as the vertex list.
    pub edges: Vec<Edge>,
    /// Color the interior is filled with.
    pub fill: Color,
    /// Color the outline is stroked with.
    pub stroke: Color,
}

impl Polygon {
    /// Build a polygon from its vertex list.
    ///
    /// Fails with [`ValidationError::InvalidGeometry`] when fewer than 3
    /// vertices are given.
    pub fn new(
        vertices: Vec<Point>,
        fill: Color,
        stroke: Color,
    ) -> Result<Self, ValidationError> {
        if vertices.len() < 3 {
            return Err(ValidationError::InvalidGeometry(vertices.len()));
        }
        let edges = find_edges(&vertices);
        Ok(Polygon {
            vertices,
            edges,
            fill,
            stroke,
        })
    }

    /// Ray-cast containment: cast a horizontal ray through `point` and
    /// count the edge crossings at or to the right of it; an odd count
    /// means inside.
    ///
    /// Points exactly on an edge or vertex get whatever verdict the
    /// tie-breaks of [`line_intersections`](Self::line_intersections)
    /// produce.
    pub fn contains(&self, point: &Point) -> bool {
        self.line_intersections(point, 0.0)
            .into_iter()
            .flatten()
            .filter(|crossing| crossing.x >= point.x)
            .count()
            % 2
            != 0
    }

    /// Intersections between every edge and the infinite line through
    /// `pivot` at `angle` (radians), one entry per edge in edge order,
    /// `None` where the edge is missed.
    ///
    /// The line is `y = m*x + q` with `m = tan(angle)`. Vertical and
    /// horizontal edges are special-cased; a line of the same orientation
    /// yields no intersection for them, as does an edge of equal slope in
    /// the general 2x2 solve (the parallel branch also swallows true
    /// overlap). A candidate on the carrying line counts as a crossing when
    /// its squared distance to the edge endpoints is `<=` the squared edge
    /// length for the start and strictly `<` for the end. The asymmetry is
    /// deliberate: a cut passing exactly through a vertex is attributed to
    /// only one of the two edges sharing it.
    pub fn line_intersections(&self, pivot: &Point, angle: Real) -> Vec<Option<Point>> {
        let m = angle.tan();
        let q = pivot.y - m * pivot.x;
        let mut intersections = Vec::with_capacity(self.edges.len());
        for edge in &self.edges {
            let candidate = if edge[0].x == edge[1].x {
                // vertical edge
                if m.is_infinite() {
                    intersections.push(None);
                    continue;
                }
                let x = edge[0].x;
                Point::new(x, m * x + q)
            } else if edge[0].y == edge[1].y {
                // horizontal edge
                if m == 0.0 {
                    intersections.push(None);
                    continue;
                }
                let y = edge[0].y;
                Point::new((y - q) / m, y)
            } else {
                let k = (edge[1].y - edge[0].y) / (edge[1].x - edge[0].x);
                let c = edge[0].y - k * edge[0].x;
                if k == m {
                    // line and edge are parallel
                    intersections.push(None);
                    continue;
                }
                // [-m 1; -k 1] [x; y] = [q; c], solved by the inverse
                let det = k - m;
                Point::new((q - c) / det, (k * q - m * c) / det)
            };
            let edge_length = distance_squared(&edge[0], &edge[1]);
            if distance_squared(&candidate, &edge[0]) <= edge_length
                && distance_squared(&candidate, &edge[1]) < edge_length
            {
                intersections.push(Some(candidate));
            } else {
                // the carrying lines cross, but outside the edge segment
                intersections.push(None);
            }
        }
        intersections
    }

    /// Cut the polygon along the infinite line through `pivot` at `angle`,
    /// yielding the vertex sequences of the two pieces.
    ///
    /// Walks the edges in order, copying each edge's start vertex into the
    /// currently active output; at every cut edge the intersection point is
    /// appended to *both* outputs and the active side flips. The two
    /// sequences cover the original area and share the cut segment as
    /// boundary.
    ///
    /// Fails when fewer than two edges are crossed. A non-convex polygon
    /// crossed more than twice keeps alternating sides at every cut, which
    /// can produce non-simple pieces; callers get exactly what the
    /// alternation yields.
    pub fn split(&self, pivot: &Point, angle: Real) -> Result<[Vec<Point>; 2], Unsplittable> {
        let intersections = self.line_intersections(pivot, angle);
        if intersections.iter().flatten().count() < 2 {
            return Err(Unsplittable);
        }
        let mut first = Vec::new();
        let mut second = Vec::new();
        let mut active_first = true;
        for (edge, crossing) in self.edges.iter().zip(&intersections) {
            if active_first {
                first.push(edge[0]);
            } else {
                second.push(edge[0]);
            }
            if let Some(crossing) = crossing {
                first.push(*crossing);
                second.push(*crossing);
                active_first = !active_first;
            }
        }
        Ok([first, second])
    }
}

/// Pair every vertex with its successor, wrapping around at the end.
fn find_edges(vertices: &[Point]) -> Vec<Edge> {
    let n = vertices.len();
    (0..n).map(|i| [vertices[i], vertices[(i + 1) % n]]).collect()
}
