//! Point types for absolute positions.
//!
//! [`Point2`] and [`Point3`] share their layout with [`Vec2`](crate::Vec2)
//! and [`Vec3`](crate::Vec3) but are separate types: a position is not a
//! direction. Points carry no arithmetic. To do displacement math, convert
//! with `Vec3::from_point` (or `Vec3::from`) and work with vectors.
//!
//! ```rust
//! use geom_math::{Point3, Vec3};
//!
//! let a = Point3::new(1.0, 1.0, 0.0);
//! let b = Point3::new(4.0, 5.0, 0.0);
//! let ab = Vec3::from_point(b) - Vec3::from_point(a);
//! assert_eq!(ab.length(), 5.0);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{parse_components, Error};

/// A position in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Point2 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

/// A position in space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Point3 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Point2 {
    /// The origin (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Point3 {
    /// The origin (0, 0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 2]> for Point2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<[f64; 3]> for Point3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl FromStr for Point2 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        parse_components(s).map(Self::from_array)
    }
}

impl FromStr for Point3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        parse_components(s).map(Self::from_array)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
