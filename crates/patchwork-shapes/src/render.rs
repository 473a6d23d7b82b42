//! The rasterizer boundary.
//!
//! The core never touches pixels. An external rasterizer implements
//! [`RenderTarget`]; the functions here walk each shape's bounding region,
//! test point membership, and hand candidate pixels (or, for segments, the
//! two endpoints) to the target through the viewport mapping.

use patchwork_core::{Color, Vec2};

use crate::shapes::{Circle, Ellipse, Line, Polygon, Shape};
use crate::viewport::Viewport;

/// Pixel sink implemented by the external rasterizer.
pub trait RenderTarget {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn draw_point(&mut self, x: i32, y: i32, color: Color);
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);
}

/// Scan-renders one shape through the viewport at the given fit ratio.
pub fn render_shape(shape: &Shape, target: &mut dyn RenderTarget, viewport: &Viewport, ratio: f64) {
    match shape {
        Shape::Circle(c) => render_circle(c, target, viewport, ratio),
        Shape::Polygon(p) => render_polygon(p, target, viewport, ratio),
        Shape::Line(l) => render_line(l, target, viewport, ratio),
        Shape::Ellipse(e) => render_ellipse(e, target, viewport, ratio),
    }
}

fn render_circle(c: &Circle, target: &mut dyn RenderTarget, viewport: &Viewport, ratio: f64) {
    let r = c.radius as i32;
    for i in -r..=r {
        for j in -r..=r {
            if ((i * i + j * j) as f64) <= c.radius * c.radius {
                let world = c.origin + Vec2::new(i as f64, j as f64);
                let (x, y) = viewport.world_to_surface(world, ratio);
                target.draw_point(x, y, c.color);
            }
        }
    }
}

fn render_polygon(p: &Polygon, target: &mut dyn RenderTarget, viewport: &Viewport, ratio: f64) {
    let bb = p.bounding_box();
    for x in bb.x_min..=bb.x_max {
        for y in bb.y_min..=bb.y_max {
            let world = Vec2::new(x as f64, y as f64);
            if p.contains_point(world) {
                let (sx, sy) = viewport.world_to_surface(world, ratio);
                target.draw_point(sx, sy, p.color);
            }
        }
    }
}

fn render_line(l: &Line, target: &mut dyn RenderTarget, viewport: &Viewport, ratio: f64) {
    let (start, end) = l.endpoints();
    let (x0, y0) = viewport.world_to_surface(start, ratio);
    let (x1, y1) = viewport.world_to_surface(end, ratio);
    target.draw_line(x0, y0, x1, y1, l.color);
}

fn render_ellipse(e: &Ellipse, target: &mut dyn RenderTarget, viewport: &Viewport, ratio: f64) {
    let (rx, ry) = (e.radius.x as i32, e.radius.y as i32);
    for i in -rx..=rx {
        for j in -ry..=ry {
            let world = e.origin + Vec2::new(i as f64, j as f64);
            if e.contains_point(world) {
                let (x, y) = viewport.world_to_surface(world, ratio);
                target.draw_point(x, y, e.color);
            }
        }
    }
}
