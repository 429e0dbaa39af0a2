use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::SeriesViewport;
use crate::error::{LayoutError, LayoutResult};
use crate::interaction::RolloverLayoutConfig;

use super::{PositionAxis, RolloverResolveStats, TooltipCandidate, resolve_positions};

pub const ROLLOVER_LAYOUT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic record of one layout pass used by regression
/// tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolloverLayoutSnapshot {
    pub viewport: SeriesViewport,
    pub config: RolloverLayoutConfig,
    /// Candidates after shift resolution, in caller order.
    pub candidates: Vec<TooltipCandidate>,
    pub stats: RolloverResolveStats,
    /// Final active-axis shift per series id, in caller order.
    pub shifts_by_series: IndexMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolloverLayoutSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: RolloverLayoutSnapshot,
}

impl RolloverLayoutSnapshot {
    /// Runs a layout pass over a copy of `candidates` and records the result.
    pub fn capture(
        candidates: &[TooltipCandidate],
        viewport: SeriesViewport,
        config: RolloverLayoutConfig,
    ) -> LayoutResult<Self> {
        let mut resolved = candidates.to_vec();
        let stats = resolve_positions(&mut resolved, viewport, config)?;

        let axis = PositionAxis::for_orientation(config.orientation);
        let shifts_by_series: IndexMap<String, f64> = resolved
            .iter()
            .map(|candidate| (candidate.series_id.clone(), axis.shift(candidate)))
            .collect();

        Ok(Self {
            viewport,
            config,
            candidates: resolved,
            stats,
            shifts_by_series,
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> LayoutResult<String> {
        let payload = RolloverLayoutSnapshotJsonContractV1 {
            schema_version: ROLLOVER_LAYOUT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            LayoutError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> LayoutResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<RolloverLayoutSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: RolloverLayoutSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                LayoutError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != ROLLOVER_LAYOUT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(LayoutError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
