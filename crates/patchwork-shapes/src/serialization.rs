//! Serialization and deserialization for design files.
//!
//! Implements save/load for .pwk design files using JSON format with
//! complete design state preservation: shapes, annotation, origin, and
//! metadata. The whitespace-token wire format in [`crate::codec`] remains
//! the interchange encoding; this layer is for designs that survive
//! sessions on disk.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use patchwork_core::{Color, Vec2};

use crate::image::Image;
use crate::shapes::{Circle, Ellipse, Line, Polygon, Shape};

/// Design file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete design file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub metadata: DesignMetadata,
    pub shapes: Vec<ShapeData>,
    #[serde(default)]
    pub annotation: String,
    #[serde(default)]
    pub origin: Vec2,
}

/// Design metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Serialized shape data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeData {
    pub shape_type: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub radius_x: f64,
    #[serde(default)]
    pub radius_y: f64,
    #[serde(default)]
    pub direction_x: f64,
    #[serde(default)]
    pub direction_y: f64,
    #[serde(default)]
    pub points: Vec<(f64, f64)>,
    #[serde(default)]
    pub color: Color,
}

impl DesignFile {
    /// Create a new design file with default values
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DesignMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            shapes: Vec::new(),
            annotation: String::new(),
            origin: Vec2::ZERO,
        }
    }

    /// Capture a live image into a design file
    pub fn from_image(name: impl Into<String>, image: &Image) -> Self {
        let mut design = Self::new(name);
        design.shapes = image.components().iter().map(shape_to_data).collect();
        design.annotation = image.annotation();
        design.origin = image.origin();
        design
    }

    /// Rebuild a live image from this design
    pub fn into_image(&self) -> Result<Image> {
        let mut components = Vec::with_capacity(self.shapes.len());
        for data in &self.shapes {
            components.push(data_to_shape(data)?);
        }
        Ok(Image::from_parts(
            self.origin,
            components,
            self.annotation.clone(),
        ))
    }

    /// Save design to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize design")?;

        std::fs::write(path.as_ref(), json).context("Failed to write design file")?;

        Ok(())
    }

    /// Load design from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read design file")?;

        let mut design: DesignFile =
            serde_json::from_str(&content).context("Failed to parse design file")?;

        // Update modified timestamp
        design.metadata.modified = Utc::now();

        Ok(design)
    }
}

fn shape_to_data(shape: &Shape) -> ShapeData {
    let mut data = ShapeData {
        shape_type: String::new(),
        x: 0.0,
        y: 0.0,
        radius: 0.0,
        radius_x: 0.0,
        radius_y: 0.0,
        direction_x: 0.0,
        direction_y: 0.0,
        points: Vec::new(),
        color: shape.color(),
    };

    match shape {
        Shape::Circle(c) => {
            data.shape_type = "circle".to_string();
            data.x = c.origin.x;
            data.y = c.origin.y;
            data.radius = c.radius;
        }
        Shape::Polygon(p) => {
            data.shape_type = "polygon".to_string();
            data.points = p.points.iter().map(|v| (v.x, v.y)).collect();
        }
        Shape::Line(l) => {
            data.shape_type = "line".to_string();
            data.x = l.point.x;
            data.y = l.point.y;
            data.direction_x = l.direction.x;
            data.direction_y = l.direction.y;
        }
        Shape::Ellipse(e) => {
            data.shape_type = "ellipse".to_string();
            data.x = e.origin.x;
            data.y = e.origin.y;
            data.radius_x = e.radius.x;
            data.radius_y = e.radius.y;
        }
    }

    data
}

fn data_to_shape(data: &ShapeData) -> Result<Shape> {
    let shape = match data.shape_type.as_str() {
        "circle" => Shape::Circle(Circle::new(
            Vec2::new(data.x, data.y),
            data.radius,
            data.color,
        )),
        "polygon" => Shape::Polygon(Polygon::new(
            data.points.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
            data.color,
        )),
        "line" => Shape::Line(Line::new(
            Vec2::new(data.x, data.y),
            Vec2::new(data.direction_x, data.direction_y),
            data.color,
        )),
        "ellipse" => Shape::Ellipse(Ellipse::new(
            Vec2::new(data.x, data.y),
            Vec2::new(data.radius_x, data.radius_y),
            data.color,
        )),
        _ => bail!("Unknown shape type: {}", data.shape_type),
    };
    Ok(shape)
}
