//! 3-component real vectors for simulation state.
//!
//! [`Vec3`] is the value type the engine uses for positions, velocities and
//! forces. It is a plain `Copy` struct with public fields; every operation is
//! a pure function of its inputs except the compound-assignment operators,
//! which update the left-hand side in place.
//!
//! ```
//! use simcore_core::Vec3;
//!
//! let mut position = Vec3::new(1.0, 0.0, 0.0);
//! let velocity = Vec3::new(0.0, 2.0, 0.0);
//!
//! position += velocity * 0.5;
//! assert_eq!(position, Vec3::new(1.0, 1.0, 0.0));
//! ```
//!
//! # Degenerate input
//!
//! Nothing here validates its input. Non-finite components propagate through
//! arithmetic as IEEE 754 dictates, and division by a zero scalar yields
//! infinities or NaN. The one special case is [`normalized`](Vec3::normalized):
//! any vector whose norm is not positive, which includes a NaN norm, maps to
//! the zero vector.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// A 3D Cartesian vector.
///
/// ```
/// use simcore_core::Vec3;
///
/// let a = Vec3::new(1.0, 2.0, 3.0);
/// let b = Vec3::new(4.0, 5.0, 6.0);
///
/// assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
/// assert_eq!(a.cross(&b), Vec3::new(-3.0, 6.0, -3.0));
/// assert_eq!(2.0 * a, a * 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the Euclidean length of the vector.
    #[inline]
    pub fn norm(&self) -> f64 {
        libm::sqrt(self.norm_squared())
    }

    /// Returns the squared length.
    ///
    /// Skips the square root; use it when only relative magnitudes matter.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// A vector whose norm is zero normalizes to the zero vector. So does one
    /// with a NaN component, since its norm is NaN.
    ///
    /// ```
    /// use simcore_core::Vec3;
    ///
    /// assert_eq!(Vec3::new(0.0, 3.0, 4.0).normalized(), Vec3::new(0.0, 0.6, 0.8));
    /// assert_eq!(Vec3::zeros().normalized(), Vec3::zeros());
    /// ```
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        if n > 0.0 {
            *self / n
        } else {
            Self::zeros()
        }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// scalar * Vec3
impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Vec3 {
        vec * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, scalar: f64) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

/// Formats as `[x, y, z]`.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_construction() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);

        assert_eq!(Vec3::default(), Vec3::zeros());
        assert_eq!(Vec3::from([4.0, 5.0, 6.0]), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(Vec3::new(1.5, 2.5, 3.5).to_array(), [1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_add_sub() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        let c = a + b;
        assert_eq!(c, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_scalar_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(3.0 * a, Vec3::new(3.0, 6.0, 9.0));
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_in_place_ops() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);

        v += Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));

        v -= Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));

        v *= 10.0;
        assert_eq!(v, Vec3::new(0.0, 10.0, 20.0));

        v /= 4.0;
        assert_eq!(v, Vec3::new(0.0, 2.5, 5.0));
    }

    #[test]
    fn test_in_place_leaves_operand_untouched() {
        let delta = Vec3::new(1.0, 1.0, 1.0);
        let mut v = Vec3::zeros();
        v += delta;
        v += delta;
        assert_eq!(v, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(delta, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_norms() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.norm(), 5.0);
        assert_eq!(v.norm_squared(), 25.0);

        let w = Vec3::new(1.0, 2.0, 2.0);
        assert_eq!(w.norm(), 3.0);
        assert_eq!(w.norm_squared(), 9.0);
    }

    #[test]
    fn test_normalized() {
        let unit = Vec3::new(3.0, 4.0, 0.0).normalized();
        assert_abs_diff_eq!(unit.norm(), 1.0, epsilon = 1e-15);
        assert_eq!(unit, Vec3::new(0.6, 0.8, 0.0));

        let scaled = Vec3::new(0.0, -7.0, 0.0).normalized();
        assert_eq!(scaled, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let zero = Vec3::zeros();
        let normalized = zero.normalized();
        assert_eq!(normalized, zero);
        assert!(!normalized.x.is_nan());
    }

    #[test]
    fn test_normalize_nan_norm_is_zero_vector() {
        assert_eq!(Vec3::new(f64::NAN, 1.0, 2.0).normalized(), Vec3::zeros());
    }

    #[test]
    fn test_dot_cross() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(Vec3::dot(&a, &b), 32.0);

        let c = a.cross(&b);
        assert_eq!(c, Vec3::new(-3.0, 6.0, -3.0));
        assert_eq!(c.dot(&a), 0.0);
        assert_eq!(c.dot(&b), 0.0);
    }

    #[test]
    fn test_cross_is_right_handed() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);

        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
        assert_eq!(y.cross(&x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_non_finite_propagates() {
        let v = Vec3::new(f64::NAN, 1.0, 2.0) + Vec3::new(1.0, 1.0, 1.0);
        assert!(v.x.is_nan());
        assert_eq!(v.y, 2.0);

        let inf = Vec3::new(1.0, 2.0, 3.0) / 0.0;
        assert!(inf.x.is_infinite());
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec3::new(1.0, -2.5, 3.0).to_string(), "[1, -2.5, 3]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = Vec3::new(0.1, -2.0e10, 3.25);
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: Vec3 = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }
}
