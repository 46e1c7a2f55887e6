use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use throttle_curve::sample;
use throttle_curve::{rpm_based_percentage, LOW_SPEED_CUTOFF};

fn criterion_benchmark(c: &mut Criterion) {
    let map = sample::torque_map();
    let mut rng = rand::thread_rng();

    let mut group = c.benchmark_group("throttle");
    group.bench_function("rpm_based_percentage", |b| {
        b.iter(|| {
            let speed = rng.gen::<f32>() * 9000.0;
            let percent = rng.gen::<f32>() * 100.0;
            rpm_based_percentage(
                black_box(speed),
                black_box(percent),
                0.0,
                9000.0,
                LOW_SPEED_CUTOFF,
            )
        });
    });
    group.bench_function("blend", |b| {
        b.iter(|| {
            let percent = rng.gen::<f32>() * 100.0;
            map.blend(black_box(percent))
        });
    });
    let mut buffer = [0.0; sample::SPEEDS.len()];
    group.bench_function("blend_into", |b| {
        b.iter(|| {
            let percent = rng.gen::<f32>() * 100.0;
            map.blend_into(black_box(percent), &mut buffer)
        });
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
