//! # Patchwork
//!
//! A 2D vector-shape composition library:
//! - Geometric primitives (circle, polygon, line segment, ellipse) with a
//!   uniform transform contract (translate, homothety, rotation, central and
//!   axial symmetry)
//! - A thread-safe composite [`Image`] container that fans transforms out to
//!   its components and anchors them with a local origin
//! - A whitespace-token wire format with per-record error recovery, plus JSON
//!   design files with metadata
//! - The geometric boundary an external rasterizer consumes: bounding boxes,
//!   point-membership tests, and shrink-to-fit viewport ratios
//!
//! ## Architecture
//!
//! Patchwork is organized as a workspace with two crates:
//!
//! 1. **patchwork-core** - Vector/color/bounding-box value types and errors
//! 2. **patchwork-shapes** - Shape variants, composite container, codecs,
//!    viewport, and the render boundary
//!
//! This crate re-exports both for convenience and owns process-level
//! concerns such as logging setup.

pub use patchwork_core::{BoundingBox, Color, Error, ParseError, Result, Vec2};

pub use patchwork_shapes::{
    decode, encode_image, encode_shape, Circle, Decoded, DesignFile, DesignMetadata, Ellipse,
    Image, Line, Polygon, RenderTarget, Shape, ShapeData, ShapeKind, Viewport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
