//! Benchmarks for the stroke pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use strokepad::codec::{decode, encode, resample, SAMPLE_STEP};
use strokepad::render::render_canvas;
use strokepad::{Canvas, Colour, Point, RasterSurface};

/// A canvas with `strokes` wavy gestures of `moves` samples each.
fn scribbles(strokes: usize, moves: usize) -> Canvas {
    let mut canvas = Canvas::new();
    for s in 0..strokes {
        let y0 = 20.0 + s as f32 * 12.0;
        canvas.gesture_start(Point::new(0.0, y0));
        for i in 1..=moves {
            let x = i as f32 * 5.0;
            let y = y0 + (i as f32 * 0.7).sin() * 8.0;
            canvas.gesture_move(Point::new(x, y));
        }
        canvas.gesture_end(Point::new(moves as f32 * 5.0 + 2.0, y0));
    }
    canvas
}

// -- Smoothing benchmarks --

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures");

    group.bench_function("gesture_200_moves", |b| {
        b.iter(|| scribbles(1, black_box(200)))
    });

    group.finish();
}

// -- Codec benchmarks --

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let small = scribbles(3, 20);
    let large = scribbles(40, 200);
    let large_bytes = large.save();

    group.bench_function("resample_stroke", |b| {
        let curve = large.store().snapshot()[0].curve();
        b.iter(|| resample(black_box(curve), SAMPLE_STEP))
    });

    group.bench_function("encode_small", |b| {
        b.iter(|| encode(black_box(small.store().snapshot())))
    });

    group.bench_function("encode_large", |b| {
        b.iter(|| encode(black_box(large.store().snapshot())))
    });

    group.bench_function("decode_large", |b| {
        b.iter(|| decode(black_box(&large_bytes)).unwrap())
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let canvas = scribbles(10, 100);

    group.bench_function("raster_512", |b| {
        b.iter(|| {
            let mut surface = RasterSurface::new(512, 512, Colour::WHITE);
            render_canvas(&mut surface, black_box(&canvas));
            surface
        })
    });

    group.finish();
}

criterion_group!(benches, bench_gestures, bench_codec, bench_rendering);
criterion_main!(benches);
