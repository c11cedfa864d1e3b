//! # geom-random
//!
//! Random sampling of scalars and vectors for geometry code.
//!
//! | Function | Distribution |
//! |----------|--------------|
//! | [`uniform`] | Uniform in `[min, max)` |
//! | [`int`] | Uniform integer in `[min, max)` |
//! | [`normal`] | Normal (Box-Muller) |
//! | [`vec2::uniform`], [`vec3::uniform`] | Per-component uniform |
//! | [`vec2::in_unit_disk`], [`vec3::in_unit_sphere`] | Inside the unit disk/sphere |
//! | [`vec2::in_hemisphere`], [`vec3::in_hemisphere`] | Unit disk/sphere, on the side of a normal |
//!
//! # Usage
//!
//! ```rust
//! use geom_math::Vec3;
//! use geom_random::{self as random, vec3};
//!
//! let jitter = random::uniform(-0.5, 0.5);
//! assert!((-0.5..0.5).contains(&jitter));
//!
//! let bounce = vec3::in_hemisphere(Vec3::Z);
//! assert!(bounce.z >= 0.0);
//! ```
//!
//! # Threading
//!
//! The free functions hold no state. Each call draws from the calling
//! thread's generator (`rand::thread_rng`), so they can be used from any
//! number of threads without coordination. For reproducible streams use a
//! [`Sampler`] built with [`Sampler::seeded`].
//!
//! # Dependencies
//!
//! - [`geom-math`] - Vector types
//! - [`rand`] - Pseudo-random source
//! - [`tracing`] - Rejection-loop diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod sampler;
pub mod vec2;
pub mod vec3;

pub use sampler::Sampler;

/// Uniform number in `[min, max)`.
#[inline]
pub fn uniform(min: f64, max: f64) -> f64 {
    Sampler::thread_local().uniform(min, max)
}

/// Uniform number in `[0, 1)`.
#[inline]
pub fn standard() -> f64 {
    Sampler::thread_local().standard()
}

/// Uniform integer in `[min, max)`: `floor(uniform(min, max))`.
#[inline]
pub fn int(min: i64, max: i64) -> i64 {
    Sampler::thread_local().int(min, max)
}

/// Normally distributed number with the given mean and standard deviation.
///
/// ```rust
/// let x = geom_random::normal(10.0, 0.0);
/// assert_eq!(x, 10.0);
/// ```
#[inline]
pub fn normal(mean: f64, std_dev: f64) -> f64 {
    Sampler::thread_local().normal(mean, std_dev)
}

/// Standard normal number (mean 0, standard deviation 1).
#[inline]
pub fn standard_normal() -> f64 {
    Sampler::thread_local().standard_normal()
}
