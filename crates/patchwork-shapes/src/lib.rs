//! # Patchwork Shapes
//!
//! This crate provides the geometric core of Patchwork: a closed set of
//! shape variants with a uniform transform contract, a thread-safe composite
//! container, the textual wire codec, and the boundary an external
//! rasterizer consumes.
//!
//! ## Core Components
//!
//! ### Shape Variants
//! - **Circle, Polygon, Line, Ellipse**: each implements the full contract
//!   (metrics, translate, homothety, rotation, central/axial symmetry,
//!   bounding box, point membership)
//! - **Shape**: the closed enum fanning every capability out per variant
//!
//! ### Composition
//! - **Image**: mutex-guarded container owning shapes, an annotation, and a
//!   local origin; fans transforms out uniformly and supports nested
//!   placement through the origin offset
//!
//! ### Codecs
//! - **codec**: whitespace-token wire format with per-record recovery
//! - **serialization**: JSON design files with metadata
//!
//! ### Render Boundary
//! - **Viewport**: surface-centered mapping and shrink-only fit ratio
//! - **RenderTarget**: the pixel-sink trait the external rasterizer
//!   implements; the core hands it candidate points and segment endpoints

pub mod codec;
pub mod image;
pub mod render;
pub mod serialization;
pub mod shapes;
pub mod viewport;

pub use codec::{decode, encode_image, encode_shape, Decoded};
pub use image::Image;
pub use render::{render_shape, RenderTarget};
pub use serialization::{DesignFile, DesignMetadata, ShapeData};
pub use shapes::{Circle, Ellipse, Line, Polygon, Shape, ShapeKind};
pub use viewport::Viewport;
