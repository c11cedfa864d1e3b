//! # geom-math
//!
//! Immutable 2D/3D vectors and points for geometry code such as ray tracers
//! and physics prototypes.
//!
//! - [`Vec2`], [`Vec3`] - directions and displacements with dot, cross,
//!   reflect and refract
//! - [`Point2`], [`Point3`] - positions, convertible to vectors
//!
//! # Design
//!
//! All types are `Copy` and every operation returns a new value. No
//! operation fails: NaN and Inf propagate per IEEE-754, so normalizing a
//! zero vector gives NaN rather than an error. Formulas that assume a unit
//! normal ([`Vec3::reflect`], [`Vec3::refract`]) document it as a
//! precondition and do not check it.
//!
//! # Usage
//!
//! ```rust
//! use geom_math::{Point3, Vec3};
//!
//! let eye = Point3::new(0.0, 0.0, 5.0);
//! let dir = (Vec3::ZERO - Vec3::from_point(eye)).normalized();
//! assert_eq!(dir, -Vec3::Z);
//!
//! let bounce = dir.reflect(Vec3::Z);
//! assert_eq!(bounce, Vec3::Z);
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for all types
//!
//! # Dependencies
//!
//! - [`glam`] - Interop conversions (`DVec2`, `DVec3`)
//! - [`thiserror`] - Parse/conversion errors
//!
//! # Used By
//!
//! - `geom-random` - Vector-valued sampling
//! - `geom` - Facade

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod point;
mod vec2;
mod vec3;

pub use error::{Error, Result};
pub use point::{Point2, Point3};
pub use vec2::Vec2;
pub use vec3::Vec3;
