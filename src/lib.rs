//! Generative "cracked surface" images built on a **partition tree**: a
//! quadtree generalized to arbitrary polygons. Points are poured into a
//! seed polygon; whenever a node overflows, its bounds are [split](polygon::Polygon::split)
//! in two along a random chord through the buffered points' centroid, and
//! the finished partition is rendered cell by cell through a [`Surface`].
//!
//! Same seed, same image: all randomness is threaded through one explicit
//! seeded generator.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: render partitions into SVG documents via the `svg` crate
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod color;
pub mod errors;
pub mod float_types;
pub mod generate;
pub mod io;
pub mod polygon;
pub mod shapes;
pub mod traits;
pub mod tree;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use color::Color;
pub use errors::ValidationError;
pub use polygon::{Point, Polygon, Unsplittable};
pub use traits::Surface;
pub use tree::PolyTree;
