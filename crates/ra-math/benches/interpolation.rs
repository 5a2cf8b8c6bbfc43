use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ra_math::{Interpolation, LinearInterpolation, LogLinearInterpolation};

fn knots(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64 * 0.25).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (-0.03 * x).exp()).collect();
    (xs, ys)
}

fn bench_interpolation(c: &mut Criterion) {
    let (xs, ys) = knots(40);
    let linear = LinearInterpolation::new(&xs, &ys).unwrap();
    let log_linear = LogLinearInterpolation::new(&xs, &ys).unwrap();
    let queries: Vec<f64> = (0..1000).map(|i| i as f64 * 0.009_7).collect();

    c.bench_function("linear_value_at_1k", |b| {
        b.iter(|| {
            for &x in &queries {
                black_box(linear.value_at(black_box(x)));
            }
        })
    });

    c.bench_function("log_linear_value_at_1k", |b| {
        b.iter(|| {
            for &x in &queries {
                black_box(log_linear.value_at(black_box(x)));
            }
        })
    });
}

criterion_group!(benches, bench_interpolation);
criterion_main!(benches);
