use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use super::{PositionAxis, TooltipCandidate};

/// Maximal run of tooltip candidates whose rendered extents would overlap or
/// violate the minimum spacing at their current positions.
///
/// Members are positions into the candidate slice the cluster was computed
/// from, ordered by active coordinate ascending. Clusters are transient and
/// recomputed on every layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipCluster {
    members: SmallVec<[usize; 8]>,
}

impl TooltipCluster {
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }
}

pub(crate) fn leading_edge_px(
    candidate: &TooltipCandidate,
    pixel_ratio: f64,
    axis: PositionAxis,
) -> f64 {
    axis.coord(candidate) + axis.shift(candidate) * pixel_ratio
}

pub(crate) fn trailing_edge_px(
    candidate: &TooltipCandidate,
    pixel_ratio: f64,
    axis: PositionAxis,
) -> f64 {
    leading_edge_px(candidate, pixel_ratio, axis) + axis.size_px(candidate)
}

/// Candidate slice positions ordered by active coordinate ascending.
///
/// Ties are stabilized by candidate `index` so shuffled inputs resolve to
/// identical shift assignments.
pub(crate) fn sorted_positions(
    candidates: &[TooltipCandidate],
    axis: PositionAxis,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by_key(|&pos| {
        (
            OrderedFloat(axis.coord(&candidates[pos])),
            candidates[pos].index,
        )
    });
    order
}

/// Reports whether any adjacent pair sits closer than `spacing_px`.
///
/// Candidates must already be ordered by active coordinate ascending; empty
/// and single-element lists never overlap.
#[must_use]
pub fn has_overlap(
    candidates: &[TooltipCandidate],
    spacing_px: f64,
    pixel_ratio: f64,
    axis: PositionAxis,
) -> bool {
    candidates.windows(2).any(|pair| {
        let gap =
            leading_edge_px(&pair[1], pixel_ratio, axis) - trailing_edge_px(&pair[0], pixel_ratio, axis);
        gap < spacing_px
    })
}

pub(crate) fn has_overlap_in_order(
    candidates: &[TooltipCandidate],
    order: &[usize],
    spacing_px: f64,
    pixel_ratio: f64,
    axis: PositionAxis,
) -> bool {
    order.windows(2).any(|pair| {
        let gap = leading_edge_px(&candidates[pair[1]], pixel_ratio, axis)
            - trailing_edge_px(&candidates[pair[0]], pixel_ratio, axis);
        gap < spacing_px
    })
}

/// Partitions candidates into maximal runs of mutually-overlapping-or-adjacent
/// tooltips.
///
/// Greedy interval merge over the coordinate-sorted sequence: a candidate
/// joins the current cluster when its leading edge starts before the cluster's
/// running trailing edge plus `spacing_px`. Inputs are sorted here, so no
/// backtracking is needed.
#[must_use]
pub fn partition_into_clusters(
    candidates: &[TooltipCandidate],
    spacing_px: f64,
    pixel_ratio: f64,
    axis: PositionAxis,
) -> Vec<TooltipCluster> {
    let order = sorted_positions(candidates, axis);
    partition_positions(candidates, &order, spacing_px, pixel_ratio, axis)
}

pub(crate) fn partition_positions(
    candidates: &[TooltipCandidate],
    order: &[usize],
    spacing_px: f64,
    pixel_ratio: f64,
    axis: PositionAxis,
) -> Vec<TooltipCluster> {
    let mut clusters = Vec::new();
    let mut current: SmallVec<[usize; 8]> = SmallVec::new();
    let mut running_trailing = f64::NEG_INFINITY;

    for &pos in order {
        let candidate = &candidates[pos];
        let leading = leading_edge_px(candidate, pixel_ratio, axis);
        if !current.is_empty() && leading >= running_trailing + spacing_px {
            clusters.push(TooltipCluster {
                members: std::mem::take(&mut current),
            });
            running_trailing = f64::NEG_INFINITY;
        }
        running_trailing = running_trailing.max(trailing_edge_px(candidate, pixel_ratio, axis));
        current.push(pos);
    }

    if !current.is_empty() {
        clusters.push(TooltipCluster { members: current });
    }

    clusters
}
