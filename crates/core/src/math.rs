//! Vector and matrix helpers shared by the rendering example.
//!
//! The types come from `glam`; componentwise subtract, scale, negate, and
//! additive accumulation are glam's own operator impls on [`Vec3`]. This
//! module adds the free-function forms used by shader-style math code plus
//! the alignment helper glam does not carry. None of these guard against
//! degenerate input; zero-length vectors and singular matrices follow
//! IEEE-754 arithmetic.

pub use glam::{Mat4, Vec3};

/// `v` scaled to unit length.
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize()
}

/// Euclidean length of `v`.
pub fn length(v: Vec3) -> f32 {
    v.length()
}

/// Squared length of `v`; avoids the square root when comparing distances.
pub fn length_squared(v: Vec3) -> f32 {
    v.length_squared()
}

/// Dot product of `a` and `b`.
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Cross product of `a` and `b`.
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Inverse of `m`. Singular input yields an implementation-defined result.
pub fn inverse(m: Mat4) -> Mat4 {
    m.inverse()
}

/// Round `value` up to the next multiple of `factor`.
///
/// `factor` must be a power of two; this is an unchecked precondition and
/// other factors produce an incorrect result rather than an error. Exact
/// multiples are returned unchanged.
pub fn round_to_power_of_two(value: usize, factor: usize) -> usize {
    (value + (factor - 1)) & !(factor - 1)
}
