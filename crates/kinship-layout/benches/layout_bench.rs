//! Benchmarks for the radial partitioner
//!
//! Measures performance of:
//! - Ring split computation across the mode thresholds
//! - Full partitioning with placement and sizing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kinship_core::{Profile, RelationClass};
use kinship_layout::{Canvas, RadialConfig, RadialPartitioner};
use kinship_rank::RankedNode;

fn ranked(n: usize) -> Vec<RankedNode> {
    (0..n)
        .map(|i| RankedNode {
            profile: Profile::new(format!("did:{i}"), format!("u{i}.test")),
            relation: RelationClass::FollowingOnly,
            score: 200.0 - i as f64,
            weight: 0.0,
            last_interaction: None,
            interactions: 0,
            rank: i,
        })
        .collect()
}

/// Benchmark ring split arithmetic
fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    let config = RadialConfig::default();

    for &n in &[3usize, 10, 20, 40, 48] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| config.split(black_box(n)))
        });
    }
    group.finish();
}

/// Benchmark full partition
fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    let partitioner = RadialPartitioner::default();

    for &n in &[5usize, 17, 35, 48] {
        let nodes = ranked(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &nodes, |b, nodes| {
            b.iter(|| partitioner.partition(black_box(nodes), Canvas::new(1080, 1080)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_split, bench_partition);
criterion_main!(benches);
