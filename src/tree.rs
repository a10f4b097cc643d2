//! The partition tree: a quadtree generalized to arbitrary polygons.
//!
//! Every node is responsible for a bounding [`Polygon`] and buffers the
//! points inserted into it. The insert that finds the buffer full splits
//! the bounds in two along a random chord through the buffered points'
//! centroid and hands everything down to the two children, which repeat
//! the game. Drawing the leaves of the finished tree produces the
//! cracked-surface look.

use crate::errors::ValidationError;
use crate::float_types::{PI, Real};
use crate::polygon::{Point, Polygon};
use crate::traits::Surface;
use rand::Rng;

/// What a node currently is: a leaf buffering points, or an interior node
/// routing them into the two halves of its bounds. Strictly zero or two
/// children; one is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
enum NodeState {
    Leaf(Vec<Point>),
    Split {
        left: Box<PolyTree>,
        right: Box<PolyTree>,
    },
}

/// A recursive binary partition of a polygon, driven by point insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyTree {
    bounds: Polygon,
    capacity: usize,
    state: NodeState,
}

impl PolyTree {
    /// Build an undivided tree over `bounds` holding up to `capacity`
    /// points per node.
    ///
    /// Fails with [`ValidationError::InvalidCapacity`] when `capacity` is
    /// zero.
    pub fn new(bounds: Polygon, capacity: usize) -> Result<Self, ValidationError> {
        if capacity == 0 {
            return Err(ValidationError::InvalidCapacity(capacity));
        }
        Ok(PolyTree {
            bounds,
            capacity,
            state: NodeState::Leaf(Vec::new()),
        })
    }

    /// The polygon this node is responsible for.
    pub const fn bounds(&self) -> &Polygon {
        &self.bounds
    }

    /// Maximum number of points a node buffers before dividing.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether this node has been divided into two children.
    pub fn is_divided(&self) -> bool {
        matches!(self.state, NodeState::Split { .. })
    }

    /// The two children, in division order, once divided.
    pub fn children(&self) -> Option<(&PolyTree, &PolyTree)> {
        match &self.state {
            NodeState::Leaf(_) => None,
            NodeState::Split { left, right } => Some((left, right)),
        }
    }

    /// Points currently buffered in this node (always empty once divided).
    pub fn buffered(&self) -> &[Point] {
        match &self.state {
            NodeState::Leaf(buffer) => buffer,
            NodeState::Split { .. } => &[],
        }
    }

    /// Number of buffered points.
    pub fn len(&self) -> usize {
        self.buffered().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffered().is_empty()
    }

    /// Insert a sampled point, returning whether it was kept.
    ///
    /// A point outside the bounds is rejected with no side effects. A full
    /// leaf first attempts to [divide](Self::divide); if the division fails
    /// the point is dropped — an accepted loss, not an error. Once divided,
    /// the point is offered to the left child and then, if that refuses,
    /// to the right.
    pub fn insert<R: Rng + ?Sized>(&mut self, point: Point, rng: &mut R) -> bool {
        if !self.bounds.contains(&point) {
            return false;
        }
        if let NodeState::Leaf(buffer) = &mut self.state {
            if buffer.len() < self.capacity {
                buffer.push(point);
                return true;
            }
            if !self.divide(rng) {
                return false;
            }
        }
        match &mut self.state {
            NodeState::Split { left, right } => {
                left.insert(point, rng) || right.insert(point, rng)
            }
            // a successful divide never leaves a leaf behind
            NodeState::Leaf(_) => false,
        }
    }

    /// Replace this full leaf by two children partitioning its bounds along
    /// a random chord through the centroid of the buffered points, then
    /// redistribute the buffer into them.
    ///
    /// Returns `false`, leaving the node an at-capacity leaf, when the cut
    /// crosses fewer than two edges or a resulting piece degenerates below
    /// three vertices. The buffer never changes after that, so every retry
    /// picks a new angle through the same centroid; a node whose centroid
    /// only admits degenerate cuts keeps failing and silently drops all
    /// further points routed to it.
    fn divide<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let points = match &self.state {
            NodeState::Leaf(buffer) => buffer.clone(),
            NodeState::Split { .. } => return true,
        };
        let n = points.len() as Real;
        let mut centroid = Point::new(0.0, 0.0);
        for point in &points {
            centroid.x += point.x;
            centroid.y += point.y;
        }
        centroid.x /= n;
        centroid.y /= n;
        let angle = rng.gen_range(0.0..PI);

        let Ok([first, second]) = self.bounds.split(&centroid, angle) else {
            return false;
        };
        let (Ok(left_bounds), Ok(right_bounds)) = (
            Polygon::new(first, self.bounds.fill, self.bounds.stroke),
            Polygon::new(second, self.bounds.fill, self.bounds.stroke),
        ) else {
            // a cut through a vertex can leave a piece with <3 vertices
            return false;
        };

        let mut left = Box::new(PolyTree {
            bounds: left_bounds,
            capacity: self.capacity,
            state: NodeState::Leaf(Vec::new()),
        });
        let mut right = Box::new(PolyTree {
            bounds: right_bounds,
            capacity: self.capacity,
            state: NodeState::Leaf(Vec::new()),
        });
        // Redistribute the snapshot: each point is offered to both
        // children and lands wherever containment says. The halves
        // partition the bounds, so under normal geometry exactly one
        // accepts; a point exactly on the cut may end up in both or in
        // neither, which is tolerated.
        for point in points {
            left.insert(point, rng);
            right.insert(point, rng);
        }
        self.state = NodeState::Split { left, right };
        true
    }

    /// Emit the partition to a drawing surface: leaves render their bounds
    /// filled and stroked at `weight`, interior nodes recurse left then
    /// right with the weight scaled by `multiplier` per generation.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, weight: Real, multiplier: Real) {
        match &self.state {
            NodeState::Leaf(_) => surface.polygon(&self.bounds, weight),
            NodeState::Split { left, right } => {
                left.draw(surface, weight * multiplier, multiplier);
                right.draw(surface, weight * multiplier, multiplier);
            }
        }
    }
}
