use approx::assert_relative_eq;

use rollover_rs::core::HitPoint;
use rollover_rs::layout::{
    PositionAxis, TooltipCandidate, partition_into_clusters, spread_cluster,
};

fn candidate_at(index: usize, y_coord: f64, height_px: f64) -> TooltipCandidate {
    TooltipCandidate::new(index, format!("series-{index}"), HitPoint::new(0.0, 0.0))
        .with_screen_position(0.0, y_coord)
        .with_size(80.0, height_px)
}

#[test]
fn spread_centers_required_span_on_the_natural_span() {
    let candidates = vec![candidate_at(0, 100.0, 20.0), candidate_at(1, 105.0, 20.0)];
    let clusters = partition_into_clusters(&candidates, 4.0, 1.0, PositionAxis::Vertical);
    assert_eq!(clusters.len(), 1);

    let shifts = spread_cluster(&clusters[0], &candidates, 4.0, 1.0, PositionAxis::Vertical, 300.0);

    assert_eq!(shifts.len(), 2);
    assert!((shifts[&0] - (-9.5)).abs() <= 1e-9);
    assert!((shifts[&1] - 9.5).abs() <= 1e-9);

    // Insertion order follows the cluster's coordinate order.
    let keys: Vec<usize> = shifts.keys().copied().collect();
    assert_eq!(keys, vec![0, 1]);
}

#[test]
fn spread_clamps_to_the_viewport_start() {
    let candidates = vec![candidate_at(0, 2.0, 20.0), candidate_at(1, 4.0, 20.0)];
    let clusters = partition_into_clusters(&candidates, 4.0, 1.0, PositionAxis::Vertical);

    let shifts = spread_cluster(&clusters[0], &candidates, 4.0, 1.0, PositionAxis::Vertical, 300.0);

    // Centered expansion would start at -9; the span clamps to [0, 44].
    let first_leading = candidates[0].y_coord + shifts[&0];
    assert!((first_leading - 0.0).abs() <= 1e-9);
    assert!((shifts[&0] - (-2.0)).abs() <= 1e-9);
    assert!((shifts[&1] - 20.0).abs() <= 1e-9);
}

#[test]
fn spread_clamps_to_the_viewport_end() {
    let candidates = vec![candidate_at(0, 280.0, 20.0), candidate_at(1, 282.0, 20.0)];
    let clusters = partition_into_clusters(&candidates, 4.0, 1.0, PositionAxis::Vertical);

    let shifts = spread_cluster(&clusters[0], &candidates, 4.0, 1.0, PositionAxis::Vertical, 300.0);

    // Centered expansion would end at 313; the span clamps to [256, 300].
    let last_trailing = candidates[1].y_coord + shifts[&1] + candidates[1].height_px;
    assert!((last_trailing - 300.0).abs() <= 1e-9);
    assert!((shifts[&0] - (-24.0)).abs() <= 1e-9);
    assert!((shifts[&1] - (-2.0)).abs() <= 1e-9);
}

#[test]
fn span_too_large_for_viewport_pins_to_viewport_and_accepts_residual_overlap() {
    let candidates = vec![
        candidate_at(0, 0.0, 6.0),
        candidate_at(1, 1.0, 6.0),
        candidate_at(2, 2.0, 6.0),
    ];
    let clusters = partition_into_clusters(&candidates, 2.0, 1.0, PositionAxis::Vertical);
    assert_eq!(clusters.len(), 1);

    let shifts = spread_cluster(&clusters[0], &candidates, 2.0, 1.0, PositionAxis::Vertical, 10.0);

    // Required span 22 in a 10 px viewport: pinned to [0, 10] with a padding
    // of (10 - 18) / 2 = -4 between members.
    assert_relative_eq!(shifts[&0], 0.0, epsilon = 1e-9);
    assert_relative_eq!(shifts[&1], 1.0, epsilon = 1e-9);
    assert_relative_eq!(shifts[&2], 2.0, epsilon = 1e-9);
}

#[test]
fn spread_shifts_are_expressed_in_logical_units() {
    let candidates = vec![candidate_at(0, 100.0, 20.0), candidate_at(1, 105.0, 20.0)];
    let clusters = partition_into_clusters(&candidates, 4.0, 2.0, PositionAxis::Vertical);

    let shifts = spread_cluster(&clusters[0], &candidates, 4.0, 2.0, PositionAxis::Vertical, 300.0);

    // Same device-pixel geometry as the ratio-1 case, halved into logical units.
    assert!((shifts[&0] - (-4.75)).abs() <= 1e-9);
    assert!((shifts[&1] - 4.75).abs() <= 1e-9);
}

#[test]
fn spread_honors_existing_shifts_in_the_natural_span() {
    // A pre-centered candidate moves the natural span; the spread works from
    // shifted edges, not raw coordinates.
    let mut candidates = vec![candidate_at(0, 100.0, 20.0), candidate_at(1, 105.0, 20.0)];
    candidates[0].y_shift = -10.0;
    candidates[1].y_shift = -10.0;

    let clusters = partition_into_clusters(&candidates, 4.0, 1.0, PositionAxis::Vertical);
    let shifts = spread_cluster(&clusters[0], &candidates, 4.0, 1.0, PositionAxis::Vertical, 300.0);

    // Natural span [90, 115] centered at 102.5; required 44 gives [80.5, 124.5].
    assert!((shifts[&0] - (-19.5)).abs() <= 1e-9);
    assert!((shifts[&1] - (-0.5)).abs() <= 1e-9);
}

#[test]
fn singleton_cluster_yields_no_shifts() {
    let candidates = vec![candidate_at(0, 40.0, 20.0), candidate_at(1, 200.0, 20.0)];
    let clusters = partition_into_clusters(&candidates, 4.0, 1.0, PositionAxis::Vertical);
    assert_eq!(clusters.len(), 2);

    let shifts = spread_cluster(&clusters[0], &candidates, 4.0, 1.0, PositionAxis::Vertical, 300.0);
    assert!(shifts.is_empty());
}
