use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eframe::egui::{Color32, Pos2};

use easel::canvas::{StrokeBuilder, Surface};

fn zigzag_stroke(points: usize) -> StrokeBuilder {
    let mut builder = StrokeBuilder::new();
    builder.begin(Pos2::ZERO);
    for i in 1..points {
        builder.add_point(Pos2::new(i as f32 * 3.0, ((i * 17) % 40) as f32));
    }
    builder
}

fn bench_smoothing(c: &mut Criterion) {
    let builder = zigzag_stroke(200);
    c.bench_function("smooth_and_flatten_200_points", |b| {
        b.iter(|| black_box(builder.flattened()))
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let points = zigzag_stroke(200).flattened();
    c.bench_function("rasterize_stroke_800x600", |b| {
        b.iter(|| {
            let mut surface = Surface::new(800, 600, Color32::WHITE);
            surface.stroke_polyline(black_box(&points), 4.0, Color32::BLACK);
            black_box(surface)
        })
    });
}

criterion_group!(benches, bench_smoothing, bench_rasterize);
criterion_main!(benches);
