//! rollover-rs: tooltip layout engine for chart rollover interactions.
//!
//! This crate computes per-tooltip pixel shifts for the tooltips a chart's
//! rollover (crosshair) modifier places along the cursor line: overlapping
//! tooltips are clustered and spread apart within the series viewport while
//! non-colliding tooltips keep their natural anchors. The host charting
//! library owns hit-testing and rendering; this crate owns the geometry.

pub mod core;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod telemetry;

pub use error::{LayoutError, LayoutResult};
pub use interaction::{ChartOrientation, RolloverLayoutConfig};
pub use layout::{TooltipCandidate, resolve_positions};
