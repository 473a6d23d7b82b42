use patchwork_core::{Color, Vec2};
use patchwork_shapes::image::Image;
use patchwork_shapes::shapes::{Circle, Line, Polygon, Shape};
use std::f64::consts::PI;
use std::sync::Arc;

fn circle_at(x: f64, y: f64, r: f64) -> Shape {
    Shape::Circle(Circle::new(Vec2::new(x, y), r, Color::RED))
}

fn assert_vec_close(a: Vec2, b: Vec2) {
    assert!(
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
        "{a:?} != {b:?}"
    );
}

#[test]
fn test_add_component_applies_origin_offset() {
    let image = Image::with_origin(Vec2::new(10.0, 0.0));
    image.add_component(circle_at(0.0, 0.0, 1.0));
    match &image.components()[0] {
        Shape::Circle(c) => assert_vec_close(c.origin, Vec2::new(10.0, 0.0)),
        other => panic!("unexpected variant {other:?}"),
    }
}

#[test]
fn test_aggregate_metrics_use_enclosing_rectangle() {
    let image = Image::new();
    image.add_component(circle_at(0.0, 0.0, 1.0));
    image.add_component(circle_at(10.0, 0.0, 1.0));
    // Union box spans (-1..11) x (-1..1)
    let bb = image.bounding_box();
    assert_eq!((bb.x_min, bb.x_max, bb.y_min, bb.y_max), (-1, 11, -1, 1));
    assert_eq!(image.area(), 24.0);
    assert_eq!(image.perimeter(), 28.0);
}

#[test]
fn test_empty_image_has_degenerate_box() {
    let image = Image::new();
    assert!(image.bounding_box().is_empty());
    assert_eq!(image.area(), 0.0);
    assert_eq!(image.perimeter(), 0.0);
    assert!(image.is_empty());
}

#[test]
fn test_set_origin_shifts_components_by_delta() {
    let image = Image::new();
    image.add_component(circle_at(5.0, 5.0, 1.0));
    image.set_origin(Vec2::new(2.0, 0.0));
    assert_vec_close(image.origin(), Vec2::new(2.0, 0.0));
    match &image.components()[0] {
        // old − new = (−2, 0)
        Shape::Circle(c) => assert_vec_close(c.origin, Vec2::new(3.0, 5.0)),
        other => panic!("unexpected variant {other:?}"),
    }
}

#[test]
fn test_merge_places_child_through_parent_origin() {
    let parent = Image::with_origin(Vec2::new(10.0, 0.0));
    let child = Image::new();
    child.add_component(circle_at(1.0, 1.0, 1.0));
    child.annotate("child note");
    parent.merge(child);
    assert_eq!(parent.len(), 1);
    match &parent.components()[0] {
        Shape::Circle(c) => assert_vec_close(c.origin, Vec2::new(11.0, 1.0)),
        other => panic!("unexpected variant {other:?}"),
    }
    // The child's annotation does not replace the parent's
    assert_eq!(parent.annotation(), "");
}

#[test]
fn test_transform_fan_out() {
    let image = Image::new();
    image.add_component(circle_at(1.0, 0.0, 1.0));
    image.add_component(Shape::Line(Line::new(
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 0.0),
        Color::BLACK,
    )));
    image.rotate_about(Vec2::ZERO, PI);
    match &image.components()[0] {
        Shape::Circle(c) => assert_vec_close(c.origin, Vec2::new(-1.0, 0.0)),
        other => panic!("unexpected variant {other:?}"),
    }
    match &image.components()[1] {
        Shape::Line(l) => {
            assert_vec_close(l.point, Vec2::new(-1.0, 0.0));
            assert_vec_close(l.direction, Vec2::new(-1.0, 0.0));
        }
        other => panic!("unexpected variant {other:?}"),
    }

    image.translate(Vec2::new(1.0, 1.0));
    match &image.components()[0] {
        Shape::Circle(c) => assert_vec_close(c.origin, Vec2::new(0.0, 1.0)),
        other => panic!("unexpected variant {other:?}"),
    }
}

#[test]
fn test_own_center_transforms_fan_out() {
    let image = Image::new();
    image.add_component(circle_at(5.0, 5.0, 2.0));
    image.homothety(3.0);
    image.rotate(PI / 4.0);
    match &image.components()[0] {
        Shape::Circle(c) => {
            // Both act about the circle's own center: the radius scales,
            // nothing moves.
            assert_vec_close(c.origin, Vec2::new(5.0, 5.0));
            assert!((c.radius - 6.0).abs() < 1e-9);
        }
        other => panic!("unexpected variant {other:?}"),
    }
}

#[test]
fn test_central_sym_fan_out_is_involution() {
    let image = Image::new();
    image.add_component(circle_at(3.0, 4.0, 2.0));
    let before = image.components();
    image.central_sym(Vec2::new(-1.0, 2.0));
    image.central_sym(Vec2::new(-1.0, 2.0));
    let after = image.components();
    match (&before[0], &after[0]) {
        (Shape::Circle(a), Shape::Circle(b)) => assert_vec_close(a.origin, b.origin),
        _ => panic!("unexpected variants"),
    }
}

#[test]
fn test_deep_clone_is_independent() {
    let image = Image::new();
    image.add_component(circle_at(0.0, 0.0, 1.0));
    image.annotate("original");
    let copy = image.deep_clone();
    image.translate(Vec2::new(100.0, 0.0));
    match &copy.components()[0] {
        Shape::Circle(c) => assert_vec_close(c.origin, Vec2::ZERO),
        other => panic!("unexpected variant {other:?}"),
    }
    assert_eq!(copy.annotation(), "original");
}

#[test]
fn test_annotation_accessors() {
    let image = Image::new();
    assert_eq!(image.annotation(), "");
    image.annotate("tagged");
    assert_eq!(image.annotation(), "tagged");
}

#[test]
fn test_clear_keeps_annotation_and_origin() {
    let image = Image::with_origin(Vec2::new(1.0, 2.0));
    image.add_component(circle_at(0.0, 0.0, 1.0));
    image.annotate("kept");
    image.clear();
    assert!(image.is_empty());
    assert_eq!(image.annotation(), "kept");
    assert_vec_close(image.origin(), Vec2::new(1.0, 2.0));
}

#[test]
fn test_polygon_components_share_fan_out() {
    let image = Image::new();
    image.add_component(Shape::Polygon(Polygon::new(
        vec![Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(1.0, 2.0)],
        Color::BLUE,
    )));
    image.homothety_about(Vec2::ZERO, 2.0);
    match &image.components()[0] {
        Shape::Polygon(p) => {
            assert_vec_close(p.points[1], Vec2::new(4.0, 0.0));
            assert_vec_close(p.points[2], Vec2::new(2.0, 4.0));
        }
        other => panic!("unexpected variant {other:?}"),
    }
}

#[test]
fn test_fit_ratio_matches_aggregate_box() {
    let image = Image::new();
    image.add_component(circle_at(150.0, 50.0, 10.0));
    // Aggregate box spans (140..160) x (40..60) on a 100x100 surface
    let ratio = image.fit_ratio(100, 100);
    assert!((ratio - 50.0 / 110.0).abs() < 1e-12);
    assert!(Image::new().fit_ratio(100, 100) == 1.0);
}

#[test]
fn test_concurrent_translates_all_land() {
    let image = Arc::new(Image::new());
    image.add_component(circle_at(0.0, 0.0, 1.0));

    let threads: Vec<_> = (0..8)
        .map(|_| {
            let image = Arc::clone(&image);
            std::thread::spawn(move || {
                image.translate(Vec2::new(1.0, 0.0));
            })
        })
        .collect();
    for t in threads {
        t.join().unwrap();
    }

    match &image.components()[0] {
        Shape::Circle(c) => assert_vec_close(c.origin, Vec2::new(8.0, 0.0)),
        other => panic!("unexpected variant {other:?}"),
    }
}
