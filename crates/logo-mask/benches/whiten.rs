use criterion::{black_box, criterion_group, criterion_main, Criterion};
use logo_mask::core::{alpha_bbox, luminance, white_with_alpha};
use logo_mask::{whiten, EmptyPolicy, RgbaImage};

/// 1024x512 black canvas with a filled disc, roughly logo-shaped.
fn synthetic_logo() -> RgbaImage {
    RgbaImage::from_fn(1024, 512, |x, y| {
        let dx = x as i64 - 400;
        let dy = y as i64 - 256;
        if dx * dx + dy * dy < 180 * 180 {
            [230, 230, 230, 255]
        } else {
            [0, 0, 0, 255]
        }
    })
}

fn bench_whiten(c: &mut Criterion) {
    let src = synthetic_logo();

    c.bench_function("luminance_1024x512", |b| {
        b.iter(|| luminance(black_box(&src)))
    });

    let mask = luminance(&src);
    c.bench_function("white_with_alpha_1024x512", |b| {
        b.iter(|| white_with_alpha(black_box(&mask)))
    });

    let composited = white_with_alpha(&mask);
    c.bench_function("alpha_bbox_1024x512", |b| {
        b.iter(|| alpha_bbox(black_box(&composited)))
    });

    c.bench_function("whiten_1024x512", |b| {
        b.iter(|| whiten(black_box(&src), EmptyPolicy::Keep))
    });
}

criterion_group!(benches, bench_whiten);
criterion_main!(benches);
