use patchwork_core::{Color, Vec2};
use patchwork_shapes::image::Image;
use patchwork_shapes::render::{render_shape, RenderTarget};
use patchwork_shapes::shapes::{Circle, Line, Shape};
use patchwork_shapes::viewport::Viewport;

#[derive(Default)]
struct RecordingTarget {
    width: u32,
    height: u32,
    points: Vec<(i32, i32, Color)>,
    lines: Vec<(i32, i32, i32, i32, Color)>,
}

impl RecordingTarget {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl RenderTarget for RecordingTarget {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        self.points.push((x, y, color));
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.lines.push((x0, y0, x1, y1, color));
    }
}

#[test]
fn test_circle_scan_plots_interior_lattice() {
    let mut target = RecordingTarget::new(100, 100);
    let vp = Viewport::new(100, 100);
    let shape = Shape::Circle(Circle::new(Vec2::new(50.0, 50.0), 2.0, Color::RED));
    render_shape(&shape, &mut target, &vp, 1.0);
    // Lattice points with i^2 + j^2 <= 4: 13 of them
    assert_eq!(target.points.len(), 13);
    assert!(target.points.iter().all(|&(_, _, c)| c == Color::RED));
    assert!(target.points.contains(&(50, 50, Color::RED)));
    assert!(target.points.contains(&(52, 50, Color::RED)));
}

#[test]
fn test_line_renders_as_mapped_endpoints() {
    let mut target = RecordingTarget::new(100, 100);
    let vp = Viewport::new(100, 100);
    let shape = Shape::Line(Line::new(
        Vec2::new(10.0, 10.0),
        Vec2::new(5.0, 0.0),
        Color::BLACK,
    ));
    render_shape(&shape, &mut target, &vp, 1.0);
    assert!(target.points.is_empty());
    assert_eq!(target.lines, vec![(10, 10, 15, 10, Color::BLACK)]);
}

#[test]
fn test_image_display_shrinks_offscreen_content() {
    let image = Image::new();
    image.add_component(Shape::Circle(Circle::new(
        Vec2::new(150.0, 50.0),
        10.0,
        Color::BLUE,
    )));
    let mut target = RecordingTarget::new(100, 100);
    image.display(&mut target);
    assert!(!target.points.is_empty());
    for &(x, y, _) in &target.points {
        assert!((0..=100).contains(&x), "x = {x}");
        assert!((0..=100).contains(&y), "y = {y}");
    }
}

#[test]
fn test_image_display_uses_component_colors() {
    let image = Image::new();
    image.add_component(Shape::Circle(Circle::new(
        Vec2::new(30.0, 30.0),
        1.0,
        Color::GREEN,
    )));
    image.add_component(Shape::Line(Line::new(
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 5.0),
        Color::RED,
    )));
    let mut target = RecordingTarget::new(100, 100);
    image.display(&mut target);
    assert!(target.points.iter().all(|&(_, _, c)| c == Color::GREEN));
    assert_eq!(target.lines.len(), 1);
    assert_eq!(target.lines[0].4, Color::RED);
}
