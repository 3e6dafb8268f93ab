use eframe::egui::{Color32, Pos2};

use easel::canvas::Surface;

fn inked(surface: &Surface) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            if surface.pixel(x as i32, y as i32) != Some(surface.background()) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn rectangle_is_independent_of_drag_direction() {
    let a = Pos2::new(40.0, 30.0);
    let b = Pos2::new(10.0, 8.0);

    let mut forward = Surface::new(64, 48, Color32::WHITE);
    forward.stroke_rect(a, b, 2.0, Color32::BLACK);
    let mut backward = Surface::new(64, 48, Color32::WHITE);
    backward.stroke_rect(b, a, 2.0, Color32::BLACK);

    assert_eq!(forward.pixels(), backward.pixels());
    assert!(!inked(&forward).is_empty());
}

#[test]
fn oval_is_independent_of_drag_direction() {
    let a = Pos2::new(50.0, 40.0);
    let b = Pos2::new(12.0, 6.0);

    let mut forward = Surface::new(64, 48, Color32::WHITE);
    forward.stroke_oval(a, b, 1.0, Color32::RED);
    let mut backward = Surface::new(64, 48, Color32::WHITE);
    backward.stroke_oval(b, a, 1.0, Color32::RED);

    assert_eq!(forward.pixels(), backward.pixels());
}

#[test]
fn line_covers_both_endpoints() {
    let mut surface = Surface::new(32, 32, Color32::WHITE);
    surface.stroke_segment(Pos2::new(3.0, 3.0), Pos2::new(28.0, 20.0), 3.0, Color32::BLUE);
    assert_eq!(surface.pixel(3, 3), Some(Color32::BLUE));
    assert_eq!(surface.pixel(28, 20), Some(Color32::BLUE));
}

#[test]
fn rectangle_outline_is_hollow() {
    let mut surface = Surface::new(64, 64, Color32::WHITE);
    surface.stroke_rect(Pos2::new(10.0, 10.0), Pos2::new(50.0, 50.0), 2.0, Color32::BLACK);
    // The border is drawn, the interior is not filled.
    assert_eq!(surface.pixel(10, 10), Some(Color32::BLACK));
    assert_eq!(surface.pixel(30, 30), Some(Color32::WHITE));
}

#[test]
fn painting_background_color_restores_pixels() {
    let mut surface = Surface::new(32, 32, Color32::WHITE);
    let points = [Pos2::new(5.0, 5.0), Pos2::new(25.0, 5.0)];
    surface.stroke_polyline(&points, 6.0, Color32::BLACK);
    assert_eq!(surface.pixel(15, 5), Some(Color32::BLACK));

    // The eraser paints the background color over the same region.
    surface.stroke_polyline(&points, 8.0, Color32::WHITE);
    assert_eq!(surface.pixels(), Surface::new(32, 32, Color32::WHITE).pixels());
}

#[test]
fn out_of_bounds_drawing_is_clipped() {
    let mut surface = Surface::new(16, 16, Color32::WHITE);
    surface.stroke_segment(
        Pos2::new(-20.0, 8.0),
        Pos2::new(40.0, 8.0),
        2.0,
        Color32::BLACK,
    );
    assert_eq!(surface.pixel(0, 8), Some(Color32::BLACK));
    assert_eq!(surface.pixel(15, 8), Some(Color32::BLACK));
}
