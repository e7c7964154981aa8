use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rain_static::control::rec::{factorial, factorial_big, markers, unroll_in, Factorial, Loop};
use rain_static::control::switch::{Case, Switch};
use rain_static::control::Exec;
use rain_static::primitive::nat::N16;
use rand::{thread_rng, Rng};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("static switch", |b| {
        let mut buf = Vec::with_capacity(64);
        b.iter(|| {
            buf.clear();
            Switch::<10>::exec_in(&mut buf).unwrap();
            black_box(&buf);
        })
    });

    c.bench_function("runtime switch", |b| {
        let mut rng = thread_rng();
        let key: i64 = rng.gen_range(-4, 4);
        let mut buf = Vec::with_capacity(64);
        b.iter(|| {
            buf.clear();
            Case::resolve(black_box(key)).exec_in(&mut buf).unwrap();
            black_box(&buf);
        })
    });

    c.bench_function("static loop 16", |b| {
        let mut buf = Vec::with_capacity(256);
        b.iter(|| {
            buf.clear();
            Loop::<N16>::exec_in(&mut buf).unwrap();
            black_box(&buf);
        })
    });

    c.bench_function("runtime loop 16", |b| {
        let mut buf = Vec::with_capacity(256);
        b.iter(|| {
            buf.clear();
            unroll_in(black_box(16), &mut buf).unwrap();
            black_box(&buf);
        })
    });

    c.bench_function("loop markers", |b| {
        let mut rng = thread_rng();
        let depth: u32 = rng.gen_range(0, 32);
        b.iter(|| black_box(markers(black_box(depth)).unwrap()))
    });

    c.bench_function("static factorial", |b| {
        b.iter(|| black_box(Factorial::<30>::RESULT))
    });

    c.bench_function("runtime factorial", |b| {
        let mut rng = thread_rng();
        let n: u32 = rng.gen_range(0, 35);
        b.iter(|| factorial(black_box(n)).unwrap())
    });

    c.bench_function("big factorial", |b| {
        let mut rng = thread_rng();
        let n: u32 = rng.gen_range(35, 100);
        b.iter(|| factorial_big(black_box(n)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
