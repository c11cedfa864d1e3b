//! 3D vector sampling on the calling thread's generator.

use geom_math::Vec3;

use crate::Sampler;

/// Vector with each component uniform in `[min, max)`.
#[inline]
pub fn uniform(min: f64, max: f64) -> Vec3 {
    Sampler::thread_local().vec3_uniform(min, max)
}

/// Vector with each component uniform in `[0, 1)`.
#[inline]
pub fn unit() -> Vec3 {
    uniform(0.0, 1.0)
}

/// Vector strictly inside the unit sphere (`length_squared() < 1`).
///
/// Rejection sampling from the enclosing cube; about 1.91 draws of three
/// components on average.
#[inline]
pub fn in_unit_sphere() -> Vec3 {
    Sampler::thread_local().in_unit_sphere()
}

/// Unit-sphere vector in the hemisphere around `normal`.
///
/// Same flip rule as [`crate::vec2::in_hemisphere`]: kept when the dot
/// product is strictly positive, negated otherwise.
#[inline]
pub fn in_hemisphere(normal: Vec3) -> Vec3 {
    Sampler::thread_local().in_hemisphere(normal)
}
