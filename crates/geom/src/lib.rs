//! # geom
//!
//! Geometric primitives for renderers and physics prototypes.
//!
//! This crate re-exports the `geom-*` crates as one surface:
//!
//! - [`Vec2`], [`Vec3`], [`Point2`], [`Point3`] from `geom-math`
//! - [`random`] - sampling from `geom-random` (feature `random`, on by default)
//!
//! # Usage
//!
//! ```rust
//! use geom::prelude::*;
//!
//! assert_eq!(Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0)), Vec3::Z);
//! assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
//!
//! let scatter = random::vec3::in_hemisphere(Vec3::Y);
//! assert!(scatter.dot(Vec3::Y) >= 0.0);
//! ```
//!
//! # Features
//!
//! - `random` (default) - the [`random`] module
//! - `serde` - `Serialize`/`Deserialize` for all vector and point types

#![warn(missing_docs)]

pub use geom_math::*;

/// Random sampling (re-export of `geom-random`).
#[cfg(feature = "random")]
pub use geom_random as random;

/// Common imports.
pub mod prelude {
    pub use geom_math::{Point2, Point3, Vec2, Vec3};

    #[cfg(feature = "random")]
    pub use geom_random::{self as random, Sampler};
}
