use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rollover_rs::core::{HitPoint, SeriesViewport};
use rollover_rs::interaction::{ChartOrientation, RolloverLayoutConfig};
use rollover_rs::layout::{
    PositionAxis, TooltipCandidate, partition_into_clusters, resolve_positions,
};

fn packed_candidates(count: usize) -> Vec<TooltipCandidate> {
    (0..count)
        .map(|i| {
            TooltipCandidate::new(i, format!("series-{i}"), HitPoint::new(i as f64, 100.0))
                .with_screen_position(60.0, 200.0 + i as f64 * 6.0)
                .with_size(90.0, 22.0)
        })
        .collect()
}

fn bench_resolve_packed_16(c: &mut Criterion) {
    let candidates = packed_candidates(16);
    let config = RolloverLayoutConfig::default()
        .with_orientation(ChartOrientation::Horizontal)
        .with_spacing_px(4.0);
    let viewport = SeriesViewport::from_size(1280.0, 960.0);

    c.bench_function("resolve_packed_16", |b| {
        b.iter(|| {
            let mut frame = candidates.clone();
            resolve_positions(black_box(&mut frame), black_box(viewport), black_box(config))
                .expect("resolve should succeed");
        })
    });
}

fn bench_partition_scattered_64(c: &mut Criterion) {
    let candidates: Vec<TooltipCandidate> = (0..64)
        .map(|i| {
            let y = (i as f64 * 37.0) % 900.0;
            TooltipCandidate::new(i, format!("series-{i}"), HitPoint::new(i as f64, y))
                .with_screen_position(60.0, y)
                .with_size(90.0, 22.0)
        })
        .collect();

    c.bench_function("partition_scattered_64", |b| {
        b.iter(|| {
            let clusters = partition_into_clusters(
                black_box(&candidates),
                black_box(4.0),
                black_box(1.0),
                black_box(PositionAxis::Vertical),
            );
            black_box(clusters);
        })
    });
}

criterion_group!(benches, bench_resolve_packed_16, bench_partition_scattered_64);
criterion_main!(benches);
