//! 2D vector sampling on the calling thread's generator.

use geom_math::Vec2;

use crate::Sampler;

/// Vector with each component uniform in `[min, max)`.
#[inline]
pub fn uniform(min: f64, max: f64) -> Vec2 {
    Sampler::thread_local().vec2_uniform(min, max)
}

/// Vector with each component uniform in `[0, 1)`.
#[inline]
pub fn unit() -> Vec2 {
    uniform(0.0, 1.0)
}

/// Vector strictly inside the unit disk (`length_squared() < 1`).
///
/// Rejection sampling from the enclosing square; about 1.27 draws of two
/// components on average.
#[inline]
pub fn in_unit_disk() -> Vec2 {
    Sampler::thread_local().in_unit_disk()
}

/// Alias of [`in_unit_disk`].
#[inline]
pub fn in_unit_circle() -> Vec2 {
    in_unit_disk()
}

/// Unit-disk vector on the side of `normal`.
///
/// The disk sample is returned as is when its dot product with `normal` is
/// strictly positive and negated otherwise, so a sample orthogonal to
/// `normal` is negated, not redrawn.
///
/// ```rust
/// use geom_math::Vec2;
///
/// let v = geom_random::vec2::in_hemisphere(Vec2::Y);
/// assert!(v.y >= 0.0);
/// ```
#[inline]
pub fn in_hemisphere(normal: Vec2) -> Vec2 {
    Sampler::thread_local().in_hemicircle(normal)
}

/// Alias of [`in_hemisphere`].
#[inline]
pub fn in_hemicircle(normal: Vec2) -> Vec2 {
    in_hemisphere(normal)
}
