//! # Patchwork Core
//!
//! Fundamental value types for the Patchwork shape library:
//! vector arithmetic, colors, integer bounding boxes, and the error
//! taxonomy shared by the codec layers.

pub mod bbox;
pub mod color;
pub mod error;
pub mod math;

pub use bbox::BoundingBox;
pub use color::Color;
pub use error::{Error, ParseError, Result};
pub use math::Vec2;
