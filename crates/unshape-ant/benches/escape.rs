//! Benchmarks for a full walk to the boundary.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use unshape_ant::{Grid, Walker, simulate};

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");
    for size in [64usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| simulate(black_box(size)))
        });
    }
    group.finish();
}

fn bench_walk_only(c: &mut Criterion) {
    c.bench_function("walk_1024", |b| {
        b.iter(|| {
            let mut grid = Grid::new(black_box(1024));
            Walker::new(&mut grid).run()
        })
    });
}

fn bench_scan(c: &mut Criterion) {
    let mut grid = Grid::new(1024);
    Walker::new(&mut grid).run();
    c.bench_function("scan_1024", |b| b.iter(|| black_box(&grid).scan_and_count()));
}

criterion_group!(benches, bench_escape, bench_walk_only, bench_scan);
criterion_main!(benches);
