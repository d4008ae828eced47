//! Minimal 2D vector arithmetic.
//!
//! `Vec2` uses `f64` components.  World coordinates are pixel-scale
//! (hundreds of units) while rule deltas are hundredths of a unit, so the
//! extra precision keeps small per-frame corrections from being swallowed
//! by rounding.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A point or displacement in world coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians from the +x axis.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Euclidean magnitude.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).length()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Scale `v` down so its magnitude is exactly `max_value` if it is longer;
/// otherwise return it unchanged.
///
/// The zero vector is returned as-is: its magnitude is never greater than a
/// non-negative `max_value`, so no division happens.
///
/// A vector whose magnitude overflows to infinity still comes back with
/// magnitude `max_value`, pointing along its dominant component(s).  A
/// vector with a NaN component has no direction and comes back as zero.
#[inline]
pub fn clamp_magnitude(v: Vec2, max_value: f64) -> Vec2 {
    if v.x.is_nan() || v.y.is_nan() {
        return Vec2::ZERO;
    }
    let mag = v.length();
    if mag.is_infinite() {
        return direction_of_huge(v) * max_value;
    }
    if mag > max_value {
        v * (max_value / mag)
    } else {
        v
    }
}

/// Unit vector along `v` when `|v|` overflows `f64`.
///
/// Infinite components dominate; otherwise the components are rescaled by
/// the larger magnitude first so the length no longer overflows.
fn direction_of_huge(v: Vec2) -> Vec2 {
    let unit = if v.x.is_infinite() || v.y.is_infinite() {
        let axis = |c: f64| if c.is_infinite() { c.signum() } else { 0.0 };
        Vec2::new(axis(v.x), axis(v.y))
    } else {
        v * (1.0 / v.x.abs().max(v.y.abs()))
    };
    unit * (1.0 / unit.length())
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::iter::Sum for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Vec2 {
        iter.fold(Vec2::ZERO, Add::add)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
