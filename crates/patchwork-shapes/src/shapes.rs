//! Geometric shape variants and the polymorphic [`Shape`] wrapper.
//!
//! Each variant owns its positional parameters and a fill color, and
//! implements the same transform contract: translate, homothety (about its
//! own bounding-box center or an arbitrary point), rotation, central and
//! axial symmetry, plus the metrics and predicates the composite container
//! and the external rasterizer consume.
//!
//! Angles are radians throughout. Degenerate inputs (zero radius, polygons
//! with fewer than three vertices, a zero direction for axial symmetry) are
//! documented caller preconditions, not runtime-checked errors.

use patchwork_core::{BoundingBox, Color, Vec2};
use std::f64::consts::PI;

/// Discriminant for the shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Polygon,
    Line,
    Ellipse,
}

/// Enum wrapper for all shape variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
    Line(Line),
    Ellipse(Ellipse),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Circle(s) => s.color,
            Shape::Polygon(s) => s.color,
            Shape::Line(s) => s.color,
            Shape::Ellipse(s) => s.color,
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle(s) => s.area(),
            Shape::Polygon(s) => s.area(),
            Shape::Line(s) => s.area(),
            Shape::Ellipse(s) => s.area(),
        }
    }

    pub fn perimeter(&self) -> f64 {
        match self {
            Shape::Circle(s) => s.perimeter(),
            Shape::Polygon(s) => s.perimeter(),
            Shape::Line(s) => s.perimeter(),
            Shape::Ellipse(s) => s.perimeter(),
        }
    }

    pub fn translate(&mut self, t: Vec2) {
        match self {
            Shape::Circle(s) => s.translate(t),
            Shape::Polygon(s) => s.translate(t),
            Shape::Line(s) => s.translate(t),
            Shape::Ellipse(s) => s.translate(t),
        }
    }

    /// Homothety about the shape's own bounding-box center.
    pub fn homothety(&mut self, ratio: f64) {
        match self {
            Shape::Circle(s) => s.homothety(ratio),
            Shape::Polygon(s) => s.homothety(ratio),
            Shape::Line(s) => s.homothety(ratio),
            Shape::Ellipse(s) => s.homothety(ratio),
        }
    }

    /// Homothety about an arbitrary point: `M ↦ p + ratio·(M − p)`.
    pub fn homothety_about(&mut self, p: Vec2, ratio: f64) {
        match self {
            Shape::Circle(s) => s.homothety_about(p, ratio),
            Shape::Polygon(s) => s.homothety_about(p, ratio),
            Shape::Line(s) => s.homothety_about(p, ratio),
            Shape::Ellipse(s) => s.homothety_about(p, ratio),
        }
    }

    /// Rotation about the shape's own reference point.
    pub fn rotate(&mut self, angle: f64) {
        match self {
            Shape::Circle(s) => s.rotate(angle),
            Shape::Polygon(s) => s.rotate(angle),
            Shape::Line(s) => s.rotate(angle),
            Shape::Ellipse(s) => s.rotate(angle),
        }
    }

    /// Rotation about an arbitrary point.
    pub fn rotate_about(&mut self, p: Vec2, angle: f64) {
        match self {
            Shape::Circle(s) => s.rotate_about(p, angle),
            Shape::Polygon(s) => s.rotate_about(p, angle),
            Shape::Line(s) => s.rotate_about(p, angle),
            Shape::Ellipse(s) => s.rotate_about(p, angle),
        }
    }

    /// Point reflection through `c`.
    pub fn central_sym(&mut self, c: Vec2) {
        match self {
            Shape::Circle(s) => s.central_sym(c),
            Shape::Polygon(s) => s.central_sym(c),
            Shape::Line(s) => s.central_sym(c),
            Shape::Ellipse(s) => s.central_sym(c),
        }
    }

    /// Reflection across the line through `p` with direction `d`.
    ///
    /// `d` must be nonzero; a zero direction is a precondition violation
    /// (division by zero in the projection).
    pub fn axial_sym(&mut self, p: Vec2, d: Vec2) {
        match self {
            Shape::Circle(s) => s.axial_sym(p, d),
            Shape::Polygon(s) => s.axial_sym(p, d),
            Shape::Line(s) => s.axial_sym(p, d),
            Shape::Ellipse(s) => s.axial_sym(p, d),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Circle(s) => s.bounding_box(),
            Shape::Polygon(s) => s.bounding_box(),
            Shape::Line(s) => s.bounding_box(),
            Shape::Ellipse(s) => s.bounding_box(),
        }
    }

    /// Point-membership test consumed by the rasterizer. A line segment has
    /// no interior and always reports `false`; the rasterizer draws it from
    /// its endpoints instead.
    pub fn contains_point(&self, p: Vec2) -> bool {
        match self {
            Shape::Circle(s) => s.contains_point(p),
            Shape::Polygon(s) => s.contains_point(p),
            Shape::Line(s) => s.contains_point(p),
            Shape::Ellipse(s) => s.contains_point(p),
        }
    }
}

fn triangle_area(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs()
}

fn reflect_across(m: Vec2, p: Vec2, d: Vec2) -> Vec2 {
    let i = m.projected_onto(p, d);
    m + 2.0 * (i - m)
}

/// A circle defined by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub origin: Vec2,
    pub radius: f64,
    pub color: Color,
}

impl Circle {
    /// Creates a new circle. The radius must be nonnegative; transforms keep
    /// it that way.
    pub fn new(origin: Vec2, radius: f64, color: Color) -> Self {
        Self {
            origin,
            radius,
            color,
        }
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    pub fn translate(&mut self, t: Vec2) {
        self.origin = self.origin + t;
    }

    pub fn homothety(&mut self, ratio: f64) {
        // Own bounding-box center is the circle's center; only the radius moves.
        self.radius *= ratio.abs();
    }

    pub fn homothety_about(&mut self, p: Vec2, ratio: f64) {
        self.origin = p + ratio * (self.origin - p);
        self.radius *= ratio.abs();
    }

    /// Rotation about the circle's own center never changes it.
    pub fn rotate(&mut self, _angle: f64) {}

    pub fn rotate_about(&mut self, p: Vec2, angle: f64) {
        self.origin = self.origin.rotated_about(p, angle);
    }

    pub fn central_sym(&mut self, c: Vec2) {
        self.translate(2.0 * (c - self.origin));
    }

    pub fn axial_sym(&mut self, p: Vec2, d: Vec2) {
        debug_assert!(d.dot(d) != 0.0, "axial symmetry needs a nonzero direction");
        self.origin = reflect_across(self.origin, p, d);
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let r = Vec2::new(self.radius, self.radius);
        BoundingBox::of_points([self.origin - r, self.origin + r])
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        let d = p - self.origin;
        d.x * d.x + d.y * d.y <= self.radius * self.radius
    }
}

/// A closed polygon defined by its ordered vertices.
///
/// The boundary follows vertex order, closing implicitly from the last
/// vertex back to the first. Callers must supply at least three vertices;
/// this is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl Polygon {
    pub fn new(points: Vec<Vec2>, color: Color) -> Self {
        Self { points, color }
    }

    /// Fan triangulation from vertex 0.
    pub fn area(&self) -> f64 {
        let p0 = self.points[0];
        self.points[1..]
            .windows(2)
            .map(|w| triangle_area(p0, w[0], w[1]))
            .sum()
    }

    /// Edge-length sum, including the closing edge.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| (self.points[(i + 1) % n] - self.points[i]).norm())
            .sum()
    }

    pub fn translate(&mut self, t: Vec2) {
        for p in &mut self.points {
            *p = *p + t;
        }
    }

    pub fn homothety(&mut self, ratio: f64) {
        let center = self.bounding_box().center();
        self.homothety_about(center, ratio);
    }

    pub fn homothety_about(&mut self, s: Vec2, ratio: f64) {
        for p in &mut self.points {
            *p = s + ratio * (*p - s);
        }
    }

    /// Rotation about the polygon's bounding-box center.
    pub fn rotate(&mut self, angle: f64) {
        let center = self.bounding_box().center();
        self.rotate_about(center, angle);
    }

    pub fn rotate_about(&mut self, p: Vec2, angle: f64) {
        for point in &mut self.points {
            *point = point.rotated_about(p, angle);
        }
    }

    pub fn central_sym(&mut self, c: Vec2) {
        for p in &mut self.points {
            *p = *p + 2.0 * (c - *p);
        }
    }

    pub fn axial_sym(&mut self, p: Vec2, d: Vec2) {
        debug_assert!(d.dot(d) != 0.0, "axial symmetry needs a nonzero direction");
        for point in &mut self.points {
            *point = reflect_across(*point, p, d);
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::of_points(self.points.iter().copied())
    }

    /// Even-odd ray casting.
    pub fn contains_point(&self, p: Vec2) -> bool {
        let n = self.points.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (pi, pj) = (self.points[i], self.points[j]);
            if ((pi.y >= p.y) != (pj.y >= p.y))
                && (p.x <= (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// A directed segment from `point` to `point + direction`.
///
/// Despite the name this is a segment, not an infinite line; transforms
/// treat both endpoints as positional parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub point: Vec2,
    pub direction: Vec2,
    pub color: Color,
}

impl Line {
    pub fn new(point: Vec2, direction: Vec2, color: Color) -> Self {
        Self {
            point,
            direction,
            color,
        }
    }

    /// Segment endpoints, start then end.
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        (self.point, self.point + self.direction)
    }

    pub fn length(&self) -> f64 {
        self.direction.norm()
    }

    /// Degenerate metric sentinel for the zero-width segment.
    pub fn area(&self) -> f64 {
        1.0
    }

    /// Degenerate metric sentinel, matching [`Line::area`].
    pub fn perimeter(&self) -> f64 {
        1.0
    }

    pub fn translate(&mut self, t: Vec2) {
        self.point = self.point + t;
    }

    pub fn homothety(&mut self, ratio: f64) {
        let center = self.bounding_box().center();
        self.homothety_about(center, ratio);
    }

    pub fn homothety_about(&mut self, p: Vec2, ratio: f64) {
        let end = self.point + self.direction;
        self.point = p + ratio * (self.point - p);
        self.direction = (p + ratio * (end - p)) - self.point;
    }

    /// Rotates the segment about its own anchor point.
    pub fn rotate(&mut self, angle: f64) {
        let end = (self.point + self.direction).rotated_about(self.point, angle);
        self.direction = end - self.point;
    }

    pub fn rotate_about(&mut self, p: Vec2, angle: f64) {
        let end = (self.point + self.direction).rotated_about(p, angle);
        self.point = self.point.rotated_about(p, angle);
        self.direction = end - self.point;
    }

    pub fn central_sym(&mut self, c: Vec2) {
        let end = self.point + self.direction;
        self.point = 2.0 * c - self.point;
        self.direction = (2.0 * c - end) - self.point;
    }

    pub fn axial_sym(&mut self, p: Vec2, d: Vec2) {
        debug_assert!(d.dot(d) != 0.0, "axial symmetry needs a nonzero direction");
        let end = self.point + self.direction;
        self.point = reflect_across(self.point, p, d);
        self.direction = reflect_across(end, p, d) - self.point;
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::of_points([self.point, self.point + self.direction])
    }

    /// A segment has no interior.
    pub fn contains_point(&self, _p: Vec2) -> bool {
        false
    }
}

/// An ellipse with independent X and Y semi-axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub origin: Vec2,
    pub radius: Vec2,
    pub color: Color,
}

impl Ellipse {
    /// Creates a new ellipse. Both semi-axes must be nonnegative; transforms
    /// keep them that way.
    pub fn new(origin: Vec2, radius: Vec2, color: Color) -> Self {
        Self {
            origin,
            radius,
            color,
        }
    }

    pub fn area(&self) -> f64 {
        PI * self.radius.x * self.radius.y
    }

    /// Ramanujan's second approximation.
    pub fn perimeter(&self) -> f64 {
        let (rx, ry) = (self.radius.x, self.radius.y);
        let h = ((rx - ry) / (rx + ry)).powi(2);
        PI * (rx + ry) * (1.0 + (3.0 * h) / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }

    pub fn translate(&mut self, t: Vec2) {
        self.origin = self.origin + t;
    }

    pub fn homothety(&mut self, ratio: f64) {
        self.radius = ratio.abs() * self.radius;
    }

    pub fn homothety_about(&mut self, p: Vec2, ratio: f64) {
        self.origin = p + ratio * (self.origin - p);
        self.radius = ratio.abs() * self.radius;
    }

    /// Axis-aligned semi-axes cannot express a rotated ellipse; this is a
    /// documented limitation and the call leaves the shape unchanged.
    pub fn rotate(&mut self, _angle: f64) {}

    /// Unsupported for the same reason as [`Ellipse::rotate`].
    pub fn rotate_about(&mut self, _p: Vec2, _angle: f64) {}

    pub fn central_sym(&mut self, c: Vec2) {
        self.translate(2.0 * (c - self.origin));
    }

    pub fn axial_sym(&mut self, p: Vec2, d: Vec2) {
        debug_assert!(d.dot(d) != 0.0, "axial symmetry needs a nonzero direction");
        self.origin = reflect_across(self.origin, p, d);
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::of_points([self.origin - self.radius, self.origin + self.radius])
    }

    /// Implicit quadratic inequality.
    pub fn contains_point(&self, p: Vec2) -> bool {
        let d = p - self.origin;
        let (rx2, ry2) = (self.radius.x * self.radius.x, self.radius.y * self.radius.y);
        d.x * d.x * ry2 + d.y * d.y * rx2 <= rx2 * ry2
    }
}
