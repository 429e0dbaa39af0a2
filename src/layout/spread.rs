use indexmap::IndexMap;

use super::cluster::{leading_edge_px, trailing_edge_px};
use super::{PositionAxis, TooltipCandidate, TooltipCluster};

/// Computes redistributed shifts for one overlapping cluster.
///
/// The cluster's members are laid out with exactly `spacing_px` of extra room
/// distributed evenly between them, centered on the natural span where the
/// viewport allows. When the centered span would cross a viewport boundary,
/// that edge is clamped to the boundary and the required width is pushed
/// entirely to the opposite side; a span too large for the viewport on both
/// sides pins to `[0, viewport_extent_px]` and the padding goes negative
/// (accepted residual overlap, never an error).
///
/// Returns an insertion-ordered mapping from each member's candidate `index`
/// to its new shift in logical units. Candidates are not mutated; clusters
/// with fewer than two members yield an empty mapping.
#[must_use]
pub fn spread_cluster(
    cluster: &TooltipCluster,
    candidates: &[TooltipCandidate],
    spacing_px: f64,
    pixel_ratio: f64,
    axis: PositionAxis,
    viewport_extent_px: f64,
) -> IndexMap<usize, f64> {
    let members = cluster.members();
    if members.len() < 2 {
        return IndexMap::new();
    }

    let total_size: f64 = members
        .iter()
        .map(|&pos| axis.size_px(&candidates[pos]))
        .sum();
    let total_spacing = (members.len() - 1) as f64 * spacing_px;
    let required = total_size + total_spacing;

    let first = &candidates[members[0]];
    let last = &candidates[members[members.len() - 1]];
    let mut start = leading_edge_px(first, pixel_ratio, axis);
    let mut end = trailing_edge_px(last, pixel_ratio, axis);

    if end - start < required {
        let center = (start + end) * 0.5;
        start = center - required * 0.5;
        end = center + required * 0.5;
        if start < 0.0 {
            start = 0.0;
            end = required;
        }
        if end > viewport_extent_px {
            end = viewport_extent_px;
            start = viewport_extent_px - required;
        }
        if start < 0.0 {
            start = 0.0;
        }
    }

    // Extra gap beyond each member's own footprint; negative only when the
    // viewport itself is smaller than the summed tooltip sizes.
    let padding = (end - start - total_size) / (members.len() - 1) as f64;

    let mut shifts = IndexMap::with_capacity(members.len());
    let mut cursor = start;
    for &pos in members {
        let candidate = &candidates[pos];
        shifts.insert(candidate.index, (cursor - axis.coord(candidate)) / pixel_ratio);
        cursor += axis.size_px(candidate) + padding;
    }

    shifts
}
