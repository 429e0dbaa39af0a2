use serde::{Deserialize, Serialize};

use crate::core::HitPoint;

/// One tooltip to be positioned for the current interaction frame.
///
/// The engine only ever writes the shift field selected by the active
/// [`PositionAxis`](super::PositionAxis); everything else is caller-owned and
/// forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipCandidate {
    /// Stable identity within one computation pass; unique per candidate list.
    pub index: usize,
    /// Opaque series payload, forwarded to the caller unchanged.
    pub series_id: String,
    /// Data-space coordinates of the hit point.
    pub data_value: HitPoint,
    /// Pixel position of the tooltip anchor on the chart surface.
    pub x_coord: f64,
    pub y_coord: f64,
    /// Rendered footprint in device pixels.
    pub width_px: f64,
    pub height_px: f64,
    /// Pixel offsets in logical units, applied to the rendered position.
    pub x_shift: f64,
    pub y_shift: f64,
    /// Whether the owning series was actually hit this frame.
    pub is_hit: bool,
}

impl TooltipCandidate {
    #[must_use]
    pub fn new(index: usize, series_id: impl Into<String>, data_value: HitPoint) -> Self {
        Self {
            index,
            series_id: series_id.into(),
            data_value,
            x_coord: 0.0,
            y_coord: 0.0,
            width_px: 0.0,
            height_px: 0.0,
            x_shift: 0.0,
            y_shift: 0.0,
            is_hit: true,
        }
    }

    #[must_use]
    pub fn with_screen_position(mut self, x_coord: f64, y_coord: f64) -> Self {
        self.x_coord = x_coord;
        self.y_coord = y_coord;
        self
    }

    #[must_use]
    pub fn with_size(mut self, width_px: f64, height_px: f64) -> Self {
        self.width_px = width_px;
        self.height_px = height_px;
        self
    }

    #[must_use]
    pub fn with_shift(mut self, x_shift: f64, y_shift: f64) -> Self {
        self.x_shift = x_shift;
        self.y_shift = y_shift;
        self
    }

    #[must_use]
    pub fn with_hit(mut self, is_hit: bool) -> Self {
        self.is_hit = is_hit;
        self
    }
}
