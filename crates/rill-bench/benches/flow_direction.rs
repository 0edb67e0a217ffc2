//! Criterion benchmarks for full flow-direction passes.

use criterion::{criterion_group, criterion_main, Criterion};
use rill_bench::{reference_profile, stress_profile};
use rill_core::NodeId;
use rill_director::FlowDirector;
use rill_grid::{LinkList, Neighbour, Raster4, Raster8, Topology};
use std::hint::black_box;

fn sequential() -> FlowDirector {
    FlowDirector::builder()
        .parallel_threshold(usize::MAX)
        .build()
        .unwrap()
}

/// Benchmark: D4 pass over the 10K-node reference raster.
fn bench_d4_reference(c: &mut Criterion) {
    let p = reference_profile(42);
    let grid = Raster4::new(p.rows, p.cols).unwrap();
    let director = sequential();

    c.bench_function("direct_flow_d4_10k", |b| {
        b.iter(|| {
            let r = director
                .direct_flow(&grid, &p.elevations, &p.statuses)
                .unwrap();
            black_box(r);
        });
    });
}

/// Benchmark: D8 pass over the 10K-node reference raster.
fn bench_d8_reference(c: &mut Criterion) {
    let p = reference_profile(42);
    let grid = Raster8::new(p.rows, p.cols).unwrap();
    let director = sequential();

    c.bench_function("direct_flow_d8_10k", |b| {
        b.iter(|| {
            let r = director
                .direct_flow(&grid, &p.elevations, &p.statuses)
                .unwrap();
            black_box(r);
        });
    });
}

/// Benchmark: the same D8 adjacency routed through a `LinkList`.
fn bench_mesh_reference(c: &mut Criterion) {
    let p = reference_profile(42);
    let grid = Raster8::new(p.rows, p.cols).unwrap();
    let adjacency: Vec<Vec<Neighbour>> = (0..grid.node_count() as u32)
        .map(|i| grid.neighbours(NodeId(i)).to_vec())
        .collect();
    let mesh = LinkList::from_adjacency(&adjacency).unwrap();
    let director = sequential();

    c.bench_function("direct_flow_mesh_10k", |b| {
        b.iter(|| {
            let r = director
                .direct_flow(&mesh, &p.elevations, &p.statuses)
                .unwrap();
            black_box(r);
        });
    });

    c.bench_function("flow_directions_raw_10k", |b| {
        b.iter(|| {
            let r = director
                .flow_directions(&adjacency, &p.elevations, &p.statuses, &[])
                .unwrap();
            black_box(r);
        });
    });
}

/// Benchmark: D8 over 250K nodes, sequential vs the rayon path.
fn bench_d8_stress(c: &mut Criterion) {
    let p = stress_profile(7);
    let grid = Raster8::new(p.rows, p.cols).unwrap();
    let seq = sequential();
    let par = FlowDirector::default();

    let mut group = c.benchmark_group("direct_flow_d8_250k");
    group.sample_size(20);
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(seq.direct_flow(&grid, &p.elevations, &p.statuses).unwrap()));
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(par.direct_flow(&grid, &p.elevations, &p.statuses).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_d4_reference,
    bench_d8_reference,
    bench_mesh_reference,
    bench_d8_stress
);
criterion_main!(benches);
