//! Rollover tooltip layout: overlap detection, clustering, and spreading.

pub mod axis;
pub mod candidate;
pub mod cluster;
pub mod resolve;
pub mod snapshot;
pub mod spread;

pub use axis::PositionAxis;
pub use candidate::TooltipCandidate;
pub use cluster::{TooltipCluster, has_overlap, partition_into_clusters};
pub use resolve::{RolloverResolveStats, resolve_positions};
pub use snapshot::{
    ROLLOVER_LAYOUT_SNAPSHOT_JSON_SCHEMA_V1, RolloverLayoutSnapshot,
    RolloverLayoutSnapshotJsonContractV1,
};
pub use spread::spread_cluster;
