//! Validation errors

use std::fmt::Display;

/// The hard construction failures.
///
/// Everything else that can go "wrong" in this crate — a point outside a
/// polygon, a cutting line that misses, a division that cannot proceed —
/// is routine control flow and is reported through `bool`, `Option` or
/// [`Unsplittable`](crate::polygon::Unsplittable) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// (InvalidGeometry) A polygon was given fewer than 3 vertices
    InvalidGeometry(usize),
    /// (InvalidCapacity) A partition tree was given a zero point capacity
    InvalidCapacity(usize),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidGeometry(found) => write!(
                f,
                "(InvalidGeometry) Polygons must have at least 3 vertices, found {found} instead"
            ),
            ValidationError::InvalidCapacity(found) => write!(
                f,
                "(InvalidCapacity) Capacity must be a positive non zero integer, found {found} instead"
            ),
        }
    }
}
