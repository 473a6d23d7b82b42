//! Axis-aligned integer bounding boxes.

use crate::math::Vec2;

/// Coordinate magnitude used for the inverted empty-box sentinel.
const SENTINEL: i32 = 10_000;

/// An axis-aligned bounding box with integer corners.
///
/// A freshly constructed box is inverted (minimums above maximums) so that a
/// plain min/max sweep over one or more points yields the tight box. A box
/// that never saw a point stays in the degenerate state; that is a
/// representable value, not an error, and [`BoundingBox::is_empty`] reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl BoundingBox {
    /// The inverted sentinel box covering no points.
    pub fn empty() -> Self {
        Self {
            x_min: SENTINEL,
            x_max: -SENTINEL,
            y_min: SENTINEL,
            y_max: -SENTINEL,
        }
    }

    /// Grows the box to cover `p`. Coordinates truncate toward zero.
    pub fn include(&mut self, p: Vec2) {
        let (x, y) = (p.x as i32, p.y as i32);
        if x < self.x_min {
            self.x_min = x;
        }
        if x > self.x_max {
            self.x_max = x;
        }
        if y < self.y_min {
            self.y_min = y;
        }
        if y > self.y_max {
            self.y_max = y;
        }
    }

    /// The tight box covering a point set.
    pub fn of_points<I: IntoIterator<Item = Vec2>>(points: I) -> Self {
        let mut bb = Self::empty();
        for p in points {
            bb.include(p);
        }
        bb
    }

    /// The smallest box covering both operands.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// True while the box is still in its inverted sentinel state.
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Horizontal extent; 0 for an empty box.
    pub fn width(&self) -> i32 {
        if self.is_empty() {
            0
        } else {
            self.x_max - self.x_min
        }
    }

    /// Vertical extent; 0 for an empty box.
    pub fn height(&self) -> i32 {
        if self.is_empty() {
            0
        } else {
            self.y_max - self.y_min
        }
    }

    /// Center of the box. Meaningful only for nonempty boxes.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x_max as f64 - (self.x_max - self.x_min) as f64 / 2.0,
            self.y_max as f64 - (self.y_max - self.y_min) as f64 / 2.0,
        )
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}
