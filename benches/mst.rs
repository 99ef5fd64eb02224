use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mstcompare::{kruskal, prim};

#[path = "../tests/common/mod.rs"]
mod common;

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");
    for (n, density) in [(50, 0.4), (300, 0.1), (1000, 0.02), (1000, 0.5)] {
        let g = common::connected_graph(n, density, 42);
        let id = format!("{n}v_{}e", g.edge_count());
        group.bench_with_input(BenchmarkId::new("prim", &id), &g, |b, g| b.iter(|| prim(g)));
        group.bench_with_input(BenchmarkId::new("kruskal", &id), &g, |b, g| {
            b.iter(|| kruskal(g))
        });
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
