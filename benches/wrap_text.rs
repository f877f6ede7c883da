use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use jarijapda::domain::{
    review::Review,
    text::{truncate_text, wrap_text},
};

fn benchmark(c: &mut Criterion) {
    let texts: Vec<String> = Review::defaults().into_iter().map(|r| r.text).collect();
    let joined = texts.join(" ");

    c.bench_function("wrap-review", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(wrap_text(black_box(text), black_box(20)));
            }
        })
    });

    c.bench_function("wrap-joined", |b| {
        b.iter(|| wrap_text(black_box(&joined), black_box(20)))
    });

    c.bench_function("wrap-then-truncate", |b| {
        b.iter(|| truncate_text(&wrap_text(black_box(&joined), black_box(22)), black_box(5)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
