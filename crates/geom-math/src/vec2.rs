//! 2D vector type.
//!
//! [`Vec2`] mirrors [`Vec3`](crate::Vec3) one dimension lower. The only
//! operation that differs is [`Vec2::cross`], which returns the scalar
//! z-component of the 3D cross product of the two vectors embedded in the
//! xy-plane (the signed parallelogram area).

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::{components_from_slice, parse_components, Error};
use crate::point::Point2;

/// A 2D vector: a direction or displacement with magnitude.
///
/// # Example
///
/// ```rust
/// use geom_math::Vec2;
///
/// assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
/// assert_eq!(Vec2::X.cross(Vec2::Y), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Vec2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Alias of [`Vec2::X`].
    pub const UNIT_X: Self = Self::X;

    /// Alias of [`Vec2::Y`].
    pub const UNIT_Y: Self = Self::Y;

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Creates the displacement from the origin to `p`.
    #[inline]
    pub const fn from_point(p: Point2) -> Self {
        Self::new(p.x, p.y)
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

    /// Multiplies both components by `s`.
    #[inline]
    pub fn scaled(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product: `self.x * other.y - self.y * other.x`.
    ///
    /// Positive when `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// The zero vector yields NaN components.
    #[inline]
    pub fn normalized(self) -> Self {
        self.scaled(1.0 / self.length())
    }

    /// Mirrors the vector about the line with unit normal `n`.
    #[inline]
    pub fn reflect(self, n: Self) -> Self {
        self - n.scaled(2.0 * self.dot(n))
    }

    /// Refracts the vector through a surface with unit normal `n`.
    ///
    /// Same formula as [`Vec3::refract`](crate::Vec3::refract); `self` and
    /// `n` are expected to be unit length and are not checked.
    pub fn refract(self, n: Self, eta: f64) -> Self {
        let cos_theta = (-self).dot(n).min(1.0);
        let r_out_perp = (self + n.scaled(cos_theta)).scaled(eta);
        let r_out_parallel = n.scaled(-(1.0 - r_out_perp.length_squared()).abs().sqrt());
        r_out_perp + r_out_parallel
    }

    /// Linear interpolation between self and other.
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns true if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts to glam DVec2.
    #[inline]
    pub fn to_glam(self) -> glam::DVec2 {
        glam::DVec2::new(self.x, self.y)
    }

    /// Creates from glam DVec2.
    #[inline]
    pub fn from_glam(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Index<usize> for Vec2 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.scaled(-1.0)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scaled(rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs.scaled(self)
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec2> for [f64; 2] {
    #[inline]
    fn from(v: Vec2) -> [f64; 2] {
        v.to_array()
    }
}

impl From<Point2> for Vec2 {
    #[inline]
    fn from(p: Point2) -> Self {
        Self::from_point(p)
    }
}

impl TryFrom<&[f64]> for Vec2 {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self, Error> {
        components_from_slice(values).map(Self::from_array)
    }
}

impl From<glam::DVec2> for Vec2 {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec2> for glam::DVec2 {
    #[inline]
    fn from(v: Vec2) -> glam::DVec2 {
        v.to_glam()
    }
}

impl FromStr for Vec2 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        parse_components(s).map(Self::from_array)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
