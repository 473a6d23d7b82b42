use patchwork_core::{Color, Vec2};
use patchwork_shapes::image::Image;
use patchwork_shapes::serialization::{DesignFile, ShapeData};
use patchwork_shapes::shapes::{Circle, Ellipse, Line, Polygon, Shape};

fn sample_image() -> Image {
    let image = Image::with_origin(Vec2::new(5.0, 0.0));
    image.add_component(Shape::Circle(Circle::new(
        Vec2::new(10.0, 10.0),
        4.0,
        Color::RED,
    )));
    image.add_component(Shape::Polygon(Polygon::new(
        vec![Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(3.0, 3.0)],
        Color::BLUE,
    )));
    image.add_component(Shape::Line(Line::new(
        Vec2::new(1.0, 2.0),
        Vec2::new(3.0, 4.0),
        Color::BLACK,
    )));
    image.add_component(Shape::Ellipse(Ellipse::new(
        Vec2::new(-2.0, 6.0),
        Vec2::new(2.0, 1.0),
        Color::GREEN,
    )));
    image.annotate("saved scene");
    image
}

#[test]
fn test_design_file_round_trips_through_disk() {
    let image = sample_image();
    let design = DesignFile::from_image("roundtrip", &image);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.pwk");
    design.save_to_file(&path).unwrap();

    let loaded = DesignFile::load_from_file(&path).unwrap();
    assert_eq!(loaded.version, "1.0");
    assert_eq!(loaded.metadata.name, "roundtrip");

    let restored = loaded.into_image().unwrap();
    assert_eq!(restored.components(), image.components());
    assert_eq!(restored.annotation(), "saved scene");
    assert_eq!(restored.origin(), image.origin());
}

#[test]
fn test_restored_image_does_not_reapply_origin() {
    let image = sample_image();
    let restored = DesignFile::from_image("offsets", &image)
        .into_image()
        .unwrap();
    // Components were captured in absolute coordinates; restoring must not
    // offset them through the origin a second time.
    assert_eq!(restored.components(), image.components());
}

#[test]
fn test_load_refreshes_modified_timestamp() {
    let design = DesignFile::new("timestamps");
    let created = design.metadata.created;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.pwk");
    design.save_to_file(&path).unwrap();

    let loaded = DesignFile::load_from_file(&path).unwrap();
    assert_eq!(loaded.metadata.created, created);
    assert!(loaded.metadata.modified >= created);
}

#[test]
fn test_unknown_shape_type_fails_loudly() {
    let mut design = DesignFile::new("bad");
    design.shapes.push(ShapeData {
        shape_type: "blob".to_string(),
        x: 0.0,
        y: 0.0,
        radius: 0.0,
        radius_x: 0.0,
        radius_y: 0.0,
        direction_x: 0.0,
        direction_y: 0.0,
        points: Vec::new(),
        color: Color::BLACK,
    });
    let err = design.into_image().unwrap_err();
    assert!(err.to_string().contains("Unknown shape type"));
}

#[test]
fn test_load_missing_file_reports_context() {
    let err = DesignFile::load_from_file("/nonexistent/patchwork.pwk").unwrap_err();
    assert!(err.to_string().contains("Failed to read design file"));
}
