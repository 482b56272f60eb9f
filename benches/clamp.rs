use criterion::{black_box, criterion_group, criterion_main, Criterion};
use joystick_core::{clamp_sample, AreaShape, ControlArea, Point};

fn bench_clamp(c: &mut Criterion) {
    let rect = ControlArea::new(120.0, 40.0, AreaShape::Rect)
        .unwrap()
        .with_lock_one_axis(true);
    let circle = ControlArea::square(80.0, AreaShape::Circle).unwrap();

    c.bench_function("clamp_rect_out_of_range", |b| {
        b.iter(|| clamp_sample(black_box(&rect), black_box(Point::new(150.0, -10.0))))
    });

    c.bench_function("clamp_circle_projection", |b| {
        b.iter(|| clamp_sample(black_box(&circle), black_box(Point::new(140.0, 140.0))))
    });
}

criterion_group!(benches, bench_clamp);
criterion_main!(benches);
