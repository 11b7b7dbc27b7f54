use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_scalar_distributions(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.001 - 5.0).collect();

    c.bench_function("normal_pdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += dc_prob::normal::pdf(x, 0.0, 1.3).unwrap();
            }
            black_box(acc)
        })
    });

    c.bench_function("normal_cdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += dc_prob::normal::cdf(x, 0.0, 1.3).unwrap();
            }
            black_box(acc)
        })
    });

    c.bench_function("binomial_pmf_support_1000", |b| {
        b.iter(|| black_box(dc_prob::binomial::pmf_support(1000, 0.37).unwrap()))
    });

    c.bench_function("linspace_1000", |b| {
        b.iter(|| black_box(dc_prob::math::linspace(-4.0, 4.0, 1000)))
    });
}

criterion_group!(benches, bench_scalar_distributions);
criterion_main!(benches);
