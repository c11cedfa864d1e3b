//! 3D vector type for directions and displacements.
//!
//! [`Vec3`] is an immutable `f64` triple. Every operation returns a new value;
//! nothing mutates in place and nothing fails. Degenerate input (zero-length
//! normalization, non-unit normals) follows IEEE-754 and yields NaN/Inf or a
//! skewed but well-defined result.
//!
//! # Usage
//!
//! ```rust
//! use geom_math::Vec3;
//!
//! let n = Vec3::X.cross(Vec3::Y);
//! assert_eq!(n, Vec3::Z);
//!
//! let incoming = Vec3::new(1.0, -1.0, 0.0);
//! let bounced = incoming.reflect(Vec3::Y);
//! assert_eq!(bounced, Vec3::new(1.0, 1.0, 0.0));
//! ```

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::{components_from_slice, parse_components, Error};
use crate::point::Point3;

/// A 3D vector: a direction or displacement with magnitude.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use geom_math::Vec3;
///
/// let v = Vec3::new(1.0, 2.0, 2.0);
/// assert_eq!(v.length(), 3.0);
/// assert_eq!(v[2], 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Alias of [`Vec3::X`].
    pub const UNIT_X: Self = Self::X;

    /// Alias of [`Vec3::Y`].
    pub const UNIT_Y: Self = Self::Y;

    /// Alias of [`Vec3::Z`].
    pub const UNIT_Z: Self = Self::Z;

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates the displacement from the origin to `p`.
    ///
    /// ```rust
    /// use geom_math::{Point3, Vec3};
    ///
    /// let v = Vec3::from_point(Point3::new(1.0, 2.0, 3.0));
    /// assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub const fn from_point(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z)
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

    /// Multiplies every component by `s`.
    #[inline]
    pub fn scaled(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-handed determinant formula).
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// Computed as `self.scaled(1.0 / self.length())`. The zero vector
    /// has no direction, so normalizing it yields NaN components.
    ///
    /// ```rust
    /// use geom_math::Vec3;
    ///
    /// assert!(Vec3::ZERO.normalized().is_nan());
    /// ```
    #[inline]
    pub fn normalized(self) -> Self {
        self.scaled(1.0 / self.length())
    }

    /// Mirrors the vector about the plane with normal `n`.
    ///
    /// `n` must be unit length; it is not normalized here, and a non-unit
    /// normal gives a scaled reflection.
    #[inline]
    pub fn reflect(self, n: Self) -> Self {
        self - n.scaled(2.0 * self.dot(n))
    }

    /// Bends the vector through a surface with normal `n` (Snell's law).
    ///
    /// `eta` is the ratio of refractive indices, incident over transmitted.
    /// Both `self` and `n` must be unit length for a physical result;
    /// neither is checked.
    ///
    /// ```rust
    /// use geom_math::Vec3;
    ///
    /// // eta = 1 with a head-on ray leaves the direction unchanged
    /// let r = (-Vec3::Z).refract(Vec3::Z, 1.0);
    /// assert_eq!(r, -Vec3::Z);
    /// ```
    pub fn refract(self, n: Self, eta: f64) -> Self {
        let cos_theta = (-self).dot(n).min(1.0);
        let r_out_perp = (self + n.scaled(cos_theta)).scaled(eta);
        let r_out_parallel = n.scaled(-(1.0 - r_out_perp.length_squared()).abs().sqrt());
        r_out_perp + r_out_parallel
    }

    /// Linear interpolation between self and other.
    ///
    /// `t = 0.0` returns self, `t = 1.0` returns other.
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam DVec3.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam DVec3.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

// Vec3 + Vec3
impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vec3 - Vec3
impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.scaled(-1.0)
    }
}

// Vec3 * f64
impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scaled(rhs)
    }
}

// f64 * Vec3
impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scaled(self)
    }
}

// Vec3 / f64
impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

impl From<Point3> for Vec3 {
    #[inline]
    fn from(p: Point3) -> Self {
        Self::from_point(p)
    }
}

impl TryFrom<&[f64]> for Vec3 {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self, Error> {
        components_from_slice(values).map(Self::from_array)
    }
}

impl From<glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::DVec3 {
    #[inline]
    fn from(v: Vec3) -> glam::DVec3 {
        v.to_glam()
    }
}

impl FromStr for Vec3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        parse_components(s).map(Self::from_array)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_vec3_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_constants() {
        assert_eq!(Vec3::ZERO, Vec3::default());
        assert_eq!(Vec3::ONE, Vec3::splat(1.0));
        assert_eq!(Vec3::UNIT_X, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(Vec3::UNIT_Y, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(Vec3::UNIT_Z, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_vec3_from_point_and_array() {
        let p = Point3::new(4.0, 5.0, 6.0);
        assert_eq!(Vec3::from_point(p), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(Vec3::from(p), Vec3::from_array([4.0, 5.0, 6.0]));
        let arr: [f64; 3] = Vec3::new(1.0, 2.0, 3.0).into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a.scaled(2.0));
        assert_eq!(-a, a.scaled(-1.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.dot(a), a.length_squared());
        assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
    }

    #[test]
    fn test_vec3_cross() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_vec3_length_and_normalized() {
        let v = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(v.length_squared(), 49.0);
        assert_eq!(v.length(), 7.0);
        assert_relative_eq!(v.normalized().length(), 1.0, epsilon = 1e-12);
        assert!(Vec3::ZERO.normalized().is_nan());
    }

    #[test]
    fn test_vec3_scaled_inverse() {
        let v = Vec3::new(0.3, -1.7, 2.9);
        let back = v.scaled(7.0).scaled(1.0 / 7.0);
        assert_abs_diff_eq!(back.x, v.x, epsilon = 1e-12);
        assert_abs_diff_eq!(back.y, v.y, epsilon = 1e-12);
        assert_abs_diff_eq!(back.z, v.z, epsilon = 1e-12);
    }

    #[test]
    fn test_vec3_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.5);
        let n = Vec3::Y;
        let r = v.reflect(n);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.5));
        assert_relative_eq!(r.length(), v.length(), epsilon = 1e-12);
        assert_eq!(r.dot(n), -v.dot(n));
    }

    #[test]
    fn test_vec3_refract_closed_form() {
        // cos_theta = min(-1, 1) = -1, perp = (1, 1, 0), |perp|^2 = 2,
        // parallel = z * -sqrt(|1 - 2|) = (0, 0, -1)
        let r = Vec3::new(1.0, 1.0, 1.0).refract(Vec3::Z, 1.0);
        assert_eq!(r, Vec3::new(1.0, 1.0, -1.0));
    }

    #[test]
    fn test_vec3_refract_snell() {
        // 45 degree incidence into glass (eta = 1/1.5)
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let v = Vec3::new(s, -s, 0.0);
        let eta = 1.0 / 1.5;
        let r = v.refract(Vec3::Y, eta);
        assert_relative_eq!(r.length(), 1.0, epsilon = 1e-12);
        // sin(out) = eta * sin(in)
        assert_relative_eq!(r.x, eta * s, epsilon = 1e-12);
        assert!(r.y < 0.0);
    }

    #[test]
    fn test_vec3_lerp() {
        assert_eq!(Vec3::ZERO.lerp(Vec3::ONE, 0.5), Vec3::splat(0.5));
    }

    #[test]
    fn test_vec3_index() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_vec3_index_out_of_bounds() {
        let _ = Vec3::ONE[3];
    }

    #[test]
    fn test_vec3_try_from_slice() {
        let v = Vec3::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        let err = Vec3::try_from(&[1.0][..]).unwrap_err();
        assert_eq!(err, Error::component_count(3, 1));
    }

    #[test]
    fn test_vec3_parse_display() {
        let v: Vec3 = "(1, -2.5, 3)".parse().unwrap();
        assert_eq!(v, Vec3::new(1.0, -2.5, 3.0));
        assert_eq!(v.to_string(), "(1, -2.5, 3)");
        assert_eq!(v.to_string().parse::<Vec3>().unwrap(), v);
        assert!("1 2".parse::<Vec3>().is_err());
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let g: glam::DVec3 = v.into();
        assert_eq!(g.cross(glam::DVec3::X), v.cross(Vec3::X).to_glam());
        assert_eq!(Vec3::from(g), v);
    }

    #[test]
    fn test_vec3_ieee_propagation() {
        let v = Vec3::new(f64::NAN, 0.0, 0.0);
        assert!(v.scaled(2.0).is_nan());
        assert!(!Vec3::new(f64::INFINITY, 0.0, 0.0).is_finite());
    }
}
