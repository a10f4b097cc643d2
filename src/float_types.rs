// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used by tests and numeric guards. The geometry routines
/// themselves compare exactly; see the tie-break contract of
/// [`Polygon::line_intersections`](crate::polygon::Polygon::line_intersections).
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used by tests and numeric guards. The geometry routines
/// themselves compare exactly; see the tie-break contract of
/// [`Polygon::line_intersections`](crate::polygon::Polygon::line_intersections).
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-9;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

/// π/4
#[cfg(feature = "f32")]
pub const FRAC_PI_4: Real = core::f32::consts::FRAC_PI_4;
/// π/4
#[cfg(feature = "f64")]
pub const FRAC_PI_4: Real = core::f64::consts::FRAC_PI_4;

/// π/8
#[cfg(feature = "f32")]
pub const FRAC_PI_8: Real = core::f32::consts::FRAC_PI_8;
/// π/8
#[cfg(feature = "f64")]
pub const FRAC_PI_8: Real = core::f64::consts::FRAC_PI_8;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;
