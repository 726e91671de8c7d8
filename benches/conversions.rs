//! Per-sample cost of each conversion pair.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tincture::{convert, Components};

/// Generate a spread of colors covering every hue sector.
fn generate_rgb_data(count: usize) -> Vec<Components<f32>> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            Components(t, (t * 2.0) % 1.0, (t * 3.0) % 1.0)
        })
        .collect()
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");
    let rgb = Components(0.823529_f32, 0.411765, 0.117647);

    group.bench_function("rgb_to_hsl", |b| b.iter(|| convert::rgb_to_hsl(black_box(rgb))));
    group.bench_function("hsl_to_rgb", |b| {
        let hsl = convert::rgb_to_hsl(rgb);
        b.iter(|| convert::hsl_to_rgb(black_box(hsl)))
    });
    group.bench_function("rgb_to_hsv", |b| b.iter(|| convert::rgb_to_hsv(black_box(rgb))));
    group.bench_function("hsv_to_rgb", |b| {
        let hsv = convert::rgb_to_hsv(rgb);
        b.iter(|| convert::hsv_to_rgb(black_box(hsv)))
    });
    group.bench_function("rgb_to_lab", |b| b.iter(|| convert::rgb_to_lab(black_box(rgb))));
    group.bench_function("lab_to_rgb", |b| {
        let lab = convert::rgb_to_lab(rgb);
        b.iter(|| convert::lab_to_rgb(black_box(lab)))
    });

    group.finish();
}

fn bench_image(c: &mut Criterion) {
    const PIXELS: usize = 512 * 512;

    let mut group = c.benchmark_group("image_512x512");
    group.throughput(Throughput::Elements(PIXELS as u64));

    let data = generate_rgb_data(PIXELS);

    group.bench_function("rgb_to_lab_f32", |b| {
        b.iter(|| {
            data.iter()
                .map(|&rgb| convert::rgb_to_lab(rgb))
                .fold(0.0_f32, |acc, lab| acc + lab.0)
        })
    });

    let data64: Vec<Components<f64>> = data.iter().map(|c| c.map(f64::from)).collect();
    group.bench_function("rgb_to_lab_f64", |b| {
        b.iter(|| {
            data64
                .iter()
                .map(|&rgb| convert::rgb_to_lab(rgb))
                .fold(0.0_f64, |acc, lab| acc + lab.0)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_single, bench_image);
criterion_main!(benches);
