//! The composite image container.
//!
//! An [`Image`] owns an ordered collection of heterogeneous shapes plus an
//! annotation string and a local origin, all behind one coarse-grained lock.
//! Every public operation acquires the lock for its full duration, so each
//! call is atomic; sequences of calls are not. The container is deliberately
//! not `Clone` (it holds a lock and exclusively owns its components);
//! duplicate it explicitly with [`Image::deep_clone`].

use parking_lot::Mutex;
use patchwork_core::{BoundingBox, Vec2};

use crate::codec;
use crate::render::{self, RenderTarget};
use crate::shapes::Shape;
use crate::viewport::Viewport;

#[derive(Debug, Default)]
struct ImageInner {
    components: Vec<Shape>,
    annotation: String,
    origin: Vec2,
}

impl ImageInner {
    fn bounding_box(&self) -> BoundingBox {
        self.components
            .iter()
            .fold(BoundingBox::empty(), |acc, c| acc.union(&c.bounding_box()))
    }
}

/// A thread-safe composite of owned shapes.
#[derive(Debug, Default)]
pub struct Image {
    inner: Mutex<ImageInner>,
}

impl Image {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty image anchored at `origin`.
    pub fn with_origin(origin: Vec2) -> Self {
        Self {
            inner: Mutex::new(ImageInner {
                origin,
                ..ImageInner::default()
            }),
        }
    }

    /// Rebuilds an image from previously captured state, without applying
    /// the origin offset to the (already positioned) components.
    pub fn from_parts(origin: Vec2, components: Vec<Shape>, annotation: String) -> Self {
        Self {
            inner: Mutex::new(ImageInner {
                components,
                annotation,
                origin,
            }),
        }
    }

    /// Translates the incoming shape by the image's current origin and
    /// appends it. Ownership transfers to the image.
    pub fn add_component(&self, mut shape: Shape) {
        let mut inner = self.inner.lock();
        let origin = inner.origin;
        shape.translate(origin);
        inner.components.push(shape);
    }

    /// Snapshot of the component list.
    pub fn components(&self) -> Vec<Shape> {
        self.inner.lock().components.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().components.is_empty()
    }

    /// Drops every component. The annotation and origin stay.
    pub fn clear(&self) {
        self.inner.lock().components.clear();
    }

    pub fn origin(&self) -> Vec2 {
        self.inner.lock().origin
    }

    /// Re-anchors the image: every component shifts by `old − new`, then the
    /// new origin is stored. This moves the image's absolute position by the
    /// delta; it is the placement mechanism for nested images.
    pub fn set_origin(&self, new_origin: Vec2) {
        let mut inner = self.inner.lock();
        let delta = inner.origin - new_origin;
        for c in &mut inner.components {
            c.translate(delta);
        }
        inner.origin = new_origin;
    }

    pub fn annotate(&self, text: impl Into<String>) {
        self.inner.lock().annotation = text.into();
    }

    pub fn annotation(&self) -> String {
        self.inner.lock().annotation.clone()
    }

    /// Aggregate area: the enclosing rectangle's area, not the member sum.
    pub fn area(&self) -> f64 {
        let bb = self.bounding_box();
        bb.width() as f64 * bb.height() as f64
    }

    /// Aggregate perimeter: the enclosing rectangle's perimeter.
    pub fn perimeter(&self) -> f64 {
        let bb = self.bounding_box();
        2.0 * (bb.width() as f64 + bb.height() as f64)
    }

    /// Union over every component's box; empty images report the degenerate
    /// sentinel box.
    pub fn bounding_box(&self) -> BoundingBox {
        self.inner.lock().bounding_box()
    }

    pub fn translate(&self, t: Vec2) {
        let mut inner = self.inner.lock();
        for c in &mut inner.components {
            c.translate(t);
        }
    }

    pub fn homothety(&self, ratio: f64) {
        let mut inner = self.inner.lock();
        for c in &mut inner.components {
            c.homothety(ratio);
        }
    }

    pub fn homothety_about(&self, p: Vec2, ratio: f64) {
        let mut inner = self.inner.lock();
        for c in &mut inner.components {
            c.homothety_about(p, ratio);
        }
    }

    pub fn rotate(&self, angle: f64) {
        let mut inner = self.inner.lock();
        for c in &mut inner.components {
            c.rotate(angle);
        }
    }

    pub fn rotate_about(&self, p: Vec2, angle: f64) {
        let mut inner = self.inner.lock();
        for c in &mut inner.components {
            c.rotate_about(p, angle);
        }
    }

    pub fn central_sym(&self, c: Vec2) {
        let mut inner = self.inner.lock();
        for component in &mut inner.components {
            component.central_sym(c);
        }
    }

    pub fn axial_sym(&self, p: Vec2, d: Vec2) {
        let mut inner = self.inner.lock();
        for component in &mut inner.components {
            component.axial_sym(p, d);
        }
    }

    /// Adopts every component of `child`, translated by this image's origin.
    /// The child's annotation is discarded.
    pub fn merge(&self, child: Image) {
        let child_inner = child.inner.into_inner();
        let mut inner = self.inner.lock();
        let origin = inner.origin;
        for mut c in child_inner.components {
            c.translate(origin);
            inner.components.push(c);
        }
    }

    /// Explicit duplication; the container itself is not `Clone`.
    pub fn deep_clone(&self) -> Image {
        let inner = self.inner.lock();
        Image::from_parts(
            inner.origin,
            inner.components.clone(),
            inner.annotation.clone(),
        )
    }

    /// Serializes every component followed by the annotation clause.
    pub fn serialize(&self) -> String {
        let inner = self.inner.lock();
        codec::encode_image(&inner.components, &inner.annotation)
    }

    /// Destructive replace: existing components are cleared before the
    /// stream is decoded, never merged. The annotation is overwritten only
    /// when the stream carries an annotation clause. Malformed records are
    /// skipped (see [`codec::decode`]); this call never fails.
    pub fn deserialize(&self, input: &str) {
        let decoded = codec::decode(input);
        let mut inner = self.inner.lock();
        inner.components = decoded.shapes;
        if let Some(annotation) = decoded.annotation {
            inner.annotation = annotation;
        }
    }

    /// Uniform scale that fits the aggregate bounding box into a surface of
    /// the given size; shrinks only, never exceeds 1.0.
    pub fn fit_ratio(&self, surface_width: u32, surface_height: u32) -> f64 {
        Viewport::new(surface_width, surface_height).fit_ratio(&self.bounding_box())
    }

    /// Fans a display call out to every component with one shared fit ratio.
    pub fn display(&self, target: &mut dyn RenderTarget) {
        let inner = self.inner.lock();
        let viewport = Viewport::new(target.width(), target.height());
        let ratio = viewport.fit_ratio(&inner.bounding_box());
        for c in &inner.components {
            render::render_shape(c, target, &viewport, ratio);
        }
    }
}
