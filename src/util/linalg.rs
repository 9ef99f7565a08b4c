#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::core::error::LinalgResult;
use crate::util::colour;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector using 64-bit floating point coordinates.
///
/// Every transform comes in three flavours that share one definition of the arithmetic:
///
/// - a free function in this module, e.g. [`add()`], that returns a fresh [`Vector2`];
/// - a `_into` free function, e.g. [`add_into()`], that writes into an existing vector;
/// - an `_in_place` method, e.g. [`Vector2::add_in_place()`], that updates the receiver and
///   returns it so that calls can be chained.
///
/// # Examples
///
/// ```
/// use vector2::core::prelude::*;
///
/// let v1 = Vector2::new(3.0, 4.0);
/// let v2 = Vector2::new(1.0, 2.0);
/// assert_eq!(linalg::add(v1, v2), Vector2::new(4.0, 6.0));
///
/// let mut v3 = v1;
/// v3.add_in_place(v2).multiply_in_place(2.0);
/// assert_eq!(v3, Vector2::new(8.0, 12.0));
/// ```
///
/// # Equality
/// [`PartialEq`] compares components exactly. Use [`Vector2::almost_eq()`] to compare within
/// [`EPSILON`](crate::core::config::EPSILON).
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Creates a vector from its components, stored verbatim.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Vector2 {
        Vector2 { x, y }
    }
    /// Returns a vector with both components set to 0.0.
    #[must_use]
    pub const fn zero() -> Vector2 {
        Vector2 { x: 0.0, y: 0.0 }
    }
    /// Returns a vector with both components set to 1.0.
    #[must_use]
    pub const fn one() -> Vector2 {
        Vector2 { x: 1.0, y: 1.0 }
    }

    /// Creates a new vector with both components set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2::core::prelude::*;
    /// let vec = Vector2::splat(3.0);
    /// assert_eq!(vec.x, 3.0);
    /// assert_eq!(vec.y, 3.0);
    /// ```
    #[must_use]
    pub const fn splat(v: f64) -> Vector2 {
        Vector2 { x: v, y: v }
    }

    /// Returns the squared length of the vector.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Returns the length of the vector, `sqrt(x*x + y*y)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2::core::prelude::*;
    /// assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
    /// ```
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Computes the dot product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2::core::prelude::*;
    /// let v1 = Vector2::new(2.0, 3.0);
    /// let v2 = Vector2::new(4.0, 5.0);
    /// assert_eq!(v1.dot(v2), 23.0); // 2*4 + 3*5
    /// ```
    #[must_use]
    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the Euclidean distance between two points.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2::core::prelude::*;
    /// let p1 = Vector2::zero();
    /// let p2 = Vector2::new(3.0, 4.0);
    /// assert_eq!(p1.distance(p2), 5.0);
    /// ```
    #[must_use]
    pub fn distance(&self, other: Vector2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Packs the vector into a 16-bit integer, `x` in the high byte and `y` in the low byte.
    ///
    /// Each component is scaled by 255, truncated toward zero and masked to 8 bits. There is
    /// no clamping, so components outside `[0, 1]` wrap around.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2::core::prelude::*;
    /// assert_eq!(Vector2::new(1.0, 1.0).to_colour_int(), 0xFFFF);
    /// assert_eq!(Vector2::new(1.0, 0.0).to_colour_int(), 0xFF00);
    /// assert_eq!(Vector2::zero().to_colour_int(), 0);
    /// ```
    #[must_use]
    pub fn to_colour_int(&self) -> u16 {
        colour::pack_u16(colour::channel_byte(self.x), colour::channel_byte(self.y))
    }

    /// Unpacks a value produced by [`Vector2::to_colour_int()`]. Components land in `[0, 1]`.
    #[must_use]
    pub fn from_colour_int(packed: u16) -> Vector2 {
        let (high, low) = colour::unpack_u16(packed);
        Vector2 {
            x: colour::channel_value(high),
            y: colour::channel_value(low),
        }
    }

    /// Returns the components as `[x, y]`.
    #[must_use]
    pub fn raw(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Checks if the vector is approximately equal to another vector.
    ///
    /// Two vectors are considered approximately equal if the length of their difference
    /// is less than [`EPSILON`](crate::core::config::EPSILON).
    pub fn almost_eq(&self, rhs: Vector2) -> bool {
        (*self - rhs).length() < EPSILON
    }

    /// Normalises this vector. A zero-length vector becomes exactly `(0, 0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2::core::prelude::*;
    /// let mut v = Vector2::new(3.0, 4.0);
    /// v.normalize_in_place();
    /// assert!(v.almost_eq(Vector2::new(0.6, 0.8)));
    /// ```
    pub fn normalize_in_place(&mut self) -> &mut Self {
        normalize_into(*self, self)
    }
    /// Replaces each component with its absolute value.
    pub fn abs_in_place(&mut self) -> &mut Self {
        abs_into(*self, self)
    }
    /// Clamps each component into `[0, 1]`.
    pub fn clamp_in_place(&mut self) -> &mut Self {
        clamp_into(*self, self)
    }
    pub fn add_in_place(&mut self, rhs: Vector2) -> &mut Self {
        add_into(*self, rhs, self)
    }
    pub fn subtract_in_place(&mut self, rhs: Vector2) -> &mut Self {
        subtract_into(*self, rhs, self)
    }
    pub fn multiply_in_place(&mut self, scalar: f64) -> &mut Self {
        multiply_into(*self, scalar, self)
    }
    pub fn multiply_vec_in_place(&mut self, rhs: Vector2) -> &mut Self {
        multiply_vec_into(*self, rhs, self)
    }
    /// Divides this vector by `scalar`.
    ///
    /// # Errors
    /// Returns [`LinalgError::DivisionByZero`] if `scalar` is zero, leaving `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2::core::prelude::*;
    /// let mut v = Vector2::new(4.0, 6.0);
    /// v.divide_in_place(2.0)?.add_in_place(Vector2::one());
    /// assert_eq!(v, Vector2::new(3.0, 4.0));
    ///
    /// assert!(v.divide_in_place(0.0).is_err());
    /// assert_eq!(v, Vector2::new(3.0, 4.0));
    /// # Ok::<(), LinalgError>(())
    /// ```
    pub fn divide_in_place(&mut self, scalar: f64) -> LinalgResult<&mut Self> {
        divide_into(*self, scalar, self)
    }
}

/// Computes the dot product of `lhs` and `rhs`.
#[must_use]
pub fn dot(lhs: Vector2, rhs: Vector2) -> f64 {
    lhs.dot(rhs)
}

/// Computes the Euclidean distance between `lhs` and `rhs`.
#[must_use]
pub fn distance(lhs: Vector2, rhs: Vector2) -> f64 {
    lhs.distance(rhs)
}

/// Writes the normalised `vector` into `out`.
///
/// The components are multiplied by the reciprocal of the length. If the length is not
/// positive, `out` is set to exactly `(0, 0)`.
pub fn normalize_into(vector: Vector2, out: &mut Vector2) -> &mut Vector2 {
    let len = vector.length();
    if len > 0.0 {
        let inv_len = 1.0 / len;
        out.x = vector.x * inv_len;
        out.y = vector.y * inv_len;
    } else {
        out.x = 0.0;
        out.y = 0.0;
    }
    out
}

/// Returns a normalised (unit) vector in the same direction as `vector`.
///
/// # Examples
///
/// ```
/// use vector2::core::prelude::*;
/// let n = linalg::normalize(Vector2::new(0.0, -2.0));
/// assert_eq!(n, Vector2::new(0.0, -1.0));
/// assert_eq!(linalg::normalize(Vector2::zero()), Vector2::zero());
/// ```
#[must_use]
pub fn normalize(vector: Vector2) -> Vector2 {
    let mut rv = Vector2::zero();
    normalize_into(vector, &mut rv);
    rv
}

pub fn abs_into(vector: Vector2, out: &mut Vector2) -> &mut Vector2 {
    out.x = vector.x.abs();
    out.y = vector.y.abs();
    out
}

/// Returns a new vector with the absolute values of each component. That is, it always lies
/// in the first quadrant.
///
/// # Examples
///
/// ```
/// use vector2::core::prelude::*;
/// assert_eq!(linalg::abs(Vector2::new(-3.0, -2.0)), Vector2::new(3.0, 2.0));
/// ```
#[must_use]
pub fn abs(vector: Vector2) -> Vector2 {
    let mut rv = Vector2::zero();
    abs_into(vector, &mut rv);
    rv
}

pub fn clamp_into(vector: Vector2, out: &mut Vector2) -> &mut Vector2 {
    out.x = vector.x.min(1.0).max(0.0);
    out.y = vector.y.min(1.0).max(0.0);
    out
}

/// Clamps each component into the closed interval `[0, 1]`.
///
/// # Examples
///
/// ```
/// use vector2::core::prelude::*;
/// assert_eq!(linalg::clamp(Vector2::new(-1.0, 2.0)), Vector2::new(0.0, 1.0));
/// assert_eq!(linalg::clamp(Vector2::new(0.25, 0.75)), Vector2::new(0.25, 0.75));
/// ```
#[must_use]
pub fn clamp(vector: Vector2) -> Vector2 {
    let mut rv = Vector2::zero();
    clamp_into(vector, &mut rv);
    rv
}

pub fn add_into(lhs: Vector2, rhs: Vector2, out: &mut Vector2) -> &mut Vector2 {
    out.x = lhs.x + rhs.x;
    out.y = lhs.y + rhs.y;
    out
}

#[must_use]
pub fn add(lhs: Vector2, rhs: Vector2) -> Vector2 {
    let mut rv = Vector2::zero();
    add_into(lhs, rhs, &mut rv);
    rv
}

pub fn subtract_into(lhs: Vector2, rhs: Vector2, out: &mut Vector2) -> &mut Vector2 {
    out.x = lhs.x - rhs.x;
    out.y = lhs.y - rhs.y;
    out
}

/// Returns `lhs - rhs`.
#[must_use]
pub fn subtract(lhs: Vector2, rhs: Vector2) -> Vector2 {
    let mut rv = Vector2::zero();
    subtract_into(lhs, rhs, &mut rv);
    rv
}

pub fn multiply_into(lhs: Vector2, scalar: f64, out: &mut Vector2) -> &mut Vector2 {
    out.x = lhs.x * scalar;
    out.y = lhs.y * scalar;
    out
}

#[must_use]
pub fn multiply(lhs: Vector2, scalar: f64) -> Vector2 {
    let mut rv = Vector2::zero();
    multiply_into(lhs, scalar, &mut rv);
    rv
}

pub fn multiply_vec_into(lhs: Vector2, rhs: Vector2, out: &mut Vector2) -> &mut Vector2 {
    out.x = lhs.x * rhs.x;
    out.y = lhs.y * rhs.y;
    out
}

/// Performs a component-wise multiplication of two vectors.
///
/// # Examples
///
/// ```
/// use vector2::core::prelude::*;
/// let v1 = Vector2::new(2.0, 3.0);
/// let v2 = Vector2::new(4.0, 5.0);
/// assert_eq!(linalg::multiply_vec(v1, v2), Vector2::new(8.0, 15.0));
/// ```
#[must_use]
pub fn multiply_vec(lhs: Vector2, rhs: Vector2) -> Vector2 {
    let mut rv = Vector2::zero();
    multiply_vec_into(lhs, rhs, &mut rv);
    rv
}

/// Writes `lhs / scalar` into `out`.
///
/// # Errors
/// Returns [`LinalgError::DivisionByZero`] if `scalar` is zero. The check happens before
/// anything is written, so `out` is untouched on failure.
pub fn divide_into(lhs: Vector2, scalar: f64, out: &mut Vector2) -> LinalgResult<&mut Vector2> {
    #[allow(clippy::float_cmp)]
    if scalar == 0.0 {
        warn!("divide(): refusing to divide {} by zero", lhs);
        return Err(LinalgError::DivisionByZero { dividend: lhs });
    }
    out.x = lhs.x / scalar;
    out.y = lhs.y / scalar;
    Ok(out)
}

/// Divides each component by `scalar`.
///
/// # Errors
/// Returns [`LinalgError::DivisionByZero`] if `scalar` is zero.
///
/// # Examples
///
/// ```
/// use vector2::core::prelude::*;
/// assert_eq!(linalg::divide(Vector2::new(4.0, 6.0), 2.0), Ok(Vector2::new(2.0, 3.0)));
/// assert!(linalg::divide(Vector2::new(4.0, 6.0), 0.0).is_err());
/// ```
pub fn divide(lhs: Vector2, scalar: f64) -> LinalgResult<Vector2> {
    let mut rv = Vector2::zero();
    divide_into(lhs, scalar, &mut rv)?;
    Ok(rv)
}

impl Zero for Vector2 {
    fn zero() -> Self {
        Vector2::zero()
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(value: [f64; 2]) -> Self {
        Vector2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<(f64, f64)> for Vector2 {
    fn from(value: (f64, f64)) -> Self {
        Vector2 {
            x: value.0,
            y: value.1,
        }
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(value: Vector2) -> Self {
        value.raw()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "Vector2(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Add<Vector2> for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Self::Output {
        add(self, rhs)
    }
}
impl AddAssign<Vector2> for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.add_in_place(rhs);
    }
}

impl Sub<Vector2> for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        subtract(self, rhs)
    }
}
impl SubAssign<Vector2> for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.subtract_in_place(rhs);
    }
}

impl Sum<Vector2> for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Self {
        iter.fold(Vector2::zero(), add)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Self::Output {
        multiply(self, rhs)
    }
}
impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        multiply(rhs, self)
    }
}
impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply_in_place(rhs);
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
