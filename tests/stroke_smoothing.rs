use eframe::egui::Pos2;

use easel::canvas::{PathSegment, StrokeBuilder, MIN_DISTANCE};

#[test]
fn crowded_points_are_dropped_during_the_drag() {
    let mut builder = StrokeBuilder::new();
    builder.begin(Pos2::new(0.0, 0.0));
    assert!(!builder.add_point(Pos2::new(MIN_DISTANCE * 0.5, 0.0)));
    assert!(builder.add_point(Pos2::new(MIN_DISTANCE * 2.0, 0.0)));
    assert_eq!(builder.points().len(), 2);
}

#[test]
fn release_point_is_kept_even_when_close() {
    let mut builder = StrokeBuilder::new();
    builder.begin(Pos2::new(0.0, 0.0));
    builder.add_point(Pos2::new(10.0, 0.0));
    builder.finish(Pos2::new(10.5, 0.0));
    assert_eq!(builder.points().len(), 3);
}

#[test]
fn smoothed_path_starts_and_ends_on_the_raw_endpoints() {
    let mut builder = StrokeBuilder::new();
    builder.begin(Pos2::new(0.0, 0.0));
    for i in 1..8 {
        builder.add_point(Pos2::new(i as f32 * 5.0, (i % 2) as f32 * 5.0));
    }
    let path = builder.path();

    assert_eq!(path.first(), Some(&PathSegment::MoveTo(Pos2::new(0.0, 0.0))));
    match path.last() {
        Some(PathSegment::LineTo(p)) => assert_eq!(*p, Pos2::new(35.0, 5.0)),
        other => panic!("expected a closing line segment, got {other:?}"),
    }
}

#[test]
fn interior_points_become_quadratic_controls() {
    let mut builder = StrokeBuilder::new();
    builder.begin(Pos2::new(0.0, 0.0));
    builder.add_point(Pos2::new(10.0, 10.0));
    builder.add_point(Pos2::new(20.0, 0.0));
    builder.add_point(Pos2::new(30.0, 10.0));
    let path = builder.path();

    let quads = path
        .iter()
        .filter(|s| matches!(s, PathSegment::QuadTo { .. }))
        .count();
    assert_eq!(quads, 2);

    // Each curve ends at the midpoint between consecutive raw points.
    match path[1] {
        PathSegment::QuadTo { control, end } => {
            assert_eq!(control, Pos2::new(10.0, 10.0));
            assert_eq!(end, Pos2::new(15.0, 5.0));
        }
        ref other => panic!("expected a curve, got {other:?}"),
    }
}

#[test]
fn short_strokes_fall_back_to_straight_lines() {
    let mut builder = StrokeBuilder::new();
    builder.begin(Pos2::new(0.0, 0.0));
    builder.add_point(Pos2::new(9.0, 0.0));
    let path = builder.path();
    assert_eq!(
        path,
        vec![
            PathSegment::MoveTo(Pos2::new(0.0, 0.0)),
            PathSegment::LineTo(Pos2::new(9.0, 0.0)),
        ]
    );
}

#[test]
fn flattened_path_stays_inside_the_point_hull() {
    let mut builder = StrokeBuilder::new();
    builder.begin(Pos2::new(0.0, 0.0));
    for i in 1..10 {
        builder.add_point(Pos2::new(i as f32 * 7.0, ((i * 13) % 20) as f32));
    }
    let flat = builder.flattened();
    assert!(flat.len() >= builder.points().len());
    for p in flat {
        assert!(p.x >= 0.0 && p.x <= 63.0);
        assert!(p.y >= 0.0 && p.y <= 20.0);
    }
}
