//! 2D vector arithmetic.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector (or point) with X and Y coordinates.
///
/// Every operation returns a new value; nothing mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new vector with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product with another vector.
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Distance to another point.
    pub fn distance_to(self, other: Vec2) -> f64 {
        (self - other).norm()
    }

    /// This point rotated by `angle` radians about `center`.
    pub fn rotated_about(self, center: Vec2, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        let d = self - center;
        Vec2::new(
            center.x + d.x * cos - d.y * sin,
            center.y + d.x * sin + d.y * cos,
        )
    }

    /// Orthogonal projection of this point onto the line through `p` with
    /// direction `d`. The direction must be nonzero.
    pub fn projected_onto(self, p: Vec2, d: Vec2) -> Vec2 {
        let b = (self - p).dot(d) / d.dot(d);
        p + b * d
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}
