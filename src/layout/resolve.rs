use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::SeriesViewport;
use crate::error::{LayoutError, LayoutResult};
use crate::interaction::RolloverLayoutConfig;

use super::cluster::{has_overlap_in_order, partition_positions, sorted_positions};
use super::{PositionAxis, TooltipCandidate, spread_cluster};

/// Summary of one layout pass, written alongside the in-place shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloverResolveStats {
    pub candidate_count: usize,
    /// Clusters found by partitioning, singletons included.
    pub cluster_count: usize,
    /// Clusters that actually had their members redistributed.
    pub spread_cluster_count: usize,
    pub overlap_detected: bool,
}

/// Resolves tooltip positions for one interaction frame.
///
/// Writes the active-axis shift of each candidate in place: on vertical
/// charts candidates are first centered under the cursor line, then any
/// overlapping runs are spread apart within the viewport extent unless
/// `allow_overlap` is set. Candidate order is never changed; results map back
/// to series through each candidate's `index`, which callers must keep unique
/// within the list.
///
/// Non-finite config or candidate fields are rejected; geometric degeneracies
/// (a viewport too small for the cluster) degrade to residual overlap instead
/// of failing.
pub fn resolve_positions(
    candidates: &mut [TooltipCandidate],
    viewport: SeriesViewport,
    config: RolloverLayoutConfig,
) -> LayoutResult<RolloverResolveStats> {
    let config = config.validate()?;
    if !viewport.is_valid() {
        return Err(LayoutError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let axis = PositionAxis::for_orientation(config.orientation);
    for candidate in candidates.iter() {
        let finite = axis.coord(candidate).is_finite()
            && axis.size_px(candidate).is_finite()
            && axis.shift(candidate).is_finite();
        if !finite {
            return Err(LayoutError::InvalidData(format!(
                "tooltip candidate {} has non-finite coordinate, size, or shift",
                candidate.index
            )));
        }
    }

    if config.orientation.is_vertical() {
        for candidate in candidates.iter_mut() {
            let half_size = axis.size_px(candidate) / (2.0 * config.pixel_ratio);
            if axis.coord(candidate) > half_size {
                axis.set_shift(candidate, -half_size);
            }
        }
    }

    let mut stats = RolloverResolveStats {
        candidate_count: candidates.len(),
        cluster_count: 0,
        spread_cluster_count: 0,
        overlap_detected: false,
    };

    if config.allow_overlap || candidates.len() < 2 {
        return Ok(stats);
    }

    let order = sorted_positions(candidates, axis);
    stats.overlap_detected = has_overlap_in_order(
        candidates,
        &order,
        config.spacing_px,
        config.pixel_ratio,
        axis,
    );
    if !stats.overlap_detected {
        return Ok(stats);
    }

    let clusters = partition_positions(
        candidates,
        &order,
        config.spacing_px,
        config.pixel_ratio,
        axis,
    );
    stats.cluster_count = clusters.len();

    let extent = axis.viewport_extent(viewport);
    for cluster in &clusters {
        if cluster.len() < 2 {
            continue;
        }
        let shifts = spread_cluster(
            cluster,
            candidates,
            config.spacing_px,
            config.pixel_ratio,
            axis,
            extent,
        );
        for &pos in cluster.members() {
            if let Some(&shift) = shifts.get(&candidates[pos].index) {
                axis.set_shift(&mut candidates[pos], shift);
            }
        }
        stats.spread_cluster_count += 1;
        trace!(members = cluster.len(), "spread tooltip cluster");
    }

    debug!(
        candidate_count = stats.candidate_count,
        cluster_count = stats.cluster_count,
        spread_cluster_count = stats.spread_cluster_count,
        "resolved rollover tooltip layout"
    );

    Ok(stats)
}
