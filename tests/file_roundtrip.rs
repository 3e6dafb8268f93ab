use eframe::egui::{Color32, Pos2};

use easel::canvas::Surface;
use easel::io::{self, SaveFormat};

fn sample_surface() -> Surface {
    let mut surface = Surface::new(40, 30, Color32::WHITE);
    surface.stroke_segment(Pos2::new(2.0, 2.0), Pos2::new(35.0, 25.0), 3.0, Color32::BLACK);
    surface.stroke_rect(Pos2::new(8.0, 4.0), Pos2::new(30.0, 20.0), 1.0, Color32::RED);
    surface
}

#[test]
fn png_round_trip_is_pixel_exact() {
    let dir = tempfile::tempdir().unwrap();
    let surface = sample_surface();

    let path = io::save_surface(&surface, dir.path().join("out.png"), SaveFormat::Png).unwrap();
    let loaded = io::load_image(&path).unwrap();
    assert_eq!(loaded.width() as usize, surface.width());
    assert_eq!(loaded.height() as usize, surface.height());

    let mut reloaded = Surface::new(surface.width(), surface.height(), Color32::WHITE);
    reloaded.place_image(&loaded);
    assert_eq!(reloaded.pixels(), surface.pixels());
}

#[test]
fn bmp_round_trip_is_pixel_exact() {
    let dir = tempfile::tempdir().unwrap();
    let surface = sample_surface();

    let path = io::save_surface(&surface, dir.path().join("out.bmp"), SaveFormat::Bmp).unwrap();
    let loaded = io::load_image(&path).unwrap();

    let mut reloaded = Surface::new(surface.width(), surface.height(), Color32::WHITE);
    reloaded.place_image(&loaded);
    assert_eq!(reloaded.pixels(), surface.pixels());
}

#[test]
fn jpeg_save_flattens_alpha_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let surface = sample_surface();

    // Lossy, so only the dimensions are checked.
    let path = io::save_surface(&surface, dir.path().join("out.jpg"), SaveFormat::Jpeg).unwrap();
    let loaded = io::load_image(&path).unwrap();
    assert_eq!(loaded.width() as usize, surface.width());
    assert_eq!(loaded.height() as usize, surface.height());
}

#[test]
fn saving_without_extension_appends_one() {
    let dir = tempfile::tempdir().unwrap();
    let surface = sample_surface();

    let path = io::save_surface(&surface, dir.path().join("drawing"), SaveFormat::Png).unwrap();
    assert_eq!(path, dir.path().join("drawing.png"));
    assert!(path.exists());
}

#[test]
fn unreadable_file_reports_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_an_image.png");
    std::fs::write(&path, b"this is not an image").unwrap();

    let err = io::load_image(&path).unwrap_err();
    assert_eq!(err.to_string(), "unsupported or corrupt image format");
}

#[test]
fn larger_images_are_cropped_to_the_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let mut big = Surface::new(60, 60, Color32::WHITE);
    big.fill(Color32::GREEN);
    let path = io::save_surface(&big, dir.path().join("big.png"), SaveFormat::Png).unwrap();
    let loaded = io::load_image(&path).unwrap();

    let mut small = Surface::new(20, 20, Color32::WHITE);
    small.place_image(&loaded);
    assert_eq!(small.pixel(19, 19), Some(Color32::GREEN));
}
