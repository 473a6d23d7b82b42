//! Surface-centered coordinate mapping and shrink-to-fit computation.
//!
//! World coordinates map onto a pixel surface by scaling about the surface
//! center. The fit ratio is the one piece of rendering-adjacent logic the
//! core keeps: pure fit-to-viewport geometry, no rasterization.

use patchwork_core::{BoundingBox, Vec2};
use std::fmt;

/// A pixel surface the external rasterizer draws into.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Surface center in pixel coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Uniform scale that brings `bb`, re-expressed in surface-centered
    /// coordinates, inside the surface. Never enlarges: the result is capped
    /// at 1.0, and an empty box fits trivially.
    pub fn fit_ratio(&self, bb: &BoundingBox) -> f64 {
        if bb.is_empty() {
            return 1.0;
        }
        let c = self.center();
        let extent_x = (bb.x_min as f64 - c.x).abs().max((bb.x_max as f64 - c.x).abs());
        let extent_y = (bb.y_min as f64 - c.y).abs().max((bb.y_max as f64 - c.y).abs());

        let mut ratio = 1.0_f64;
        if extent_x > 0.0 {
            ratio = ratio.min(c.x / extent_x);
        }
        if extent_y > 0.0 {
            ratio = ratio.min(c.y / extent_y);
        }
        ratio
    }

    /// Maps a world point to surface pixel coordinates, scaling by `ratio`
    /// about the surface center.
    pub fn world_to_surface(&self, p: Vec2, ratio: f64) -> (i32, i32) {
        let c = self.center();
        let mapped = c + ratio * (p - c);
        (mapped.x as i32, mapped.y as i32)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
