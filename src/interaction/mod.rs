use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartOrientation {
    /// Category axis runs along the bottom; tooltips spread horizontally.
    Vertical,
    /// Category axis runs along the side; tooltips spread vertically.
    Horizontal,
}

impl ChartOrientation {
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, ChartOrientation::Vertical)
    }
}

/// Tuning for rollover tooltip overlap resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RolloverLayoutConfig {
    pub orientation: ChartOrientation,
    /// Skips cluster spreading entirely; tooltips keep their natural anchors.
    pub allow_overlap: bool,
    /// Minimum gap kept between adjacent tooltips, in device pixels.
    pub spacing_px: f64,
    /// Device pixels per logical layout unit.
    pub pixel_ratio: f64,
}

impl Default for RolloverLayoutConfig {
    fn default() -> Self {
        Self {
            orientation: ChartOrientation::Vertical,
            allow_overlap: false,
            spacing_px: 4.0,
            pixel_ratio: 1.0,
        }
    }
}

impl RolloverLayoutConfig {
    #[must_use]
    pub fn with_orientation(mut self, orientation: ChartOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_allow_overlap(mut self, allow_overlap: bool) -> Self {
        self.allow_overlap = allow_overlap;
        self
    }

    #[must_use]
    pub fn with_spacing_px(mut self, spacing_px: f64) -> Self {
        self.spacing_px = spacing_px;
        self
    }

    #[must_use]
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    pub fn validate(self) -> LayoutResult<Self> {
        if !self.spacing_px.is_finite() || self.spacing_px < 0.0 {
            return Err(LayoutError::InvalidData(
                "rollover config `spacing_px` must be finite and >= 0".to_owned(),
            ));
        }
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return Err(LayoutError::InvalidData(
                "rollover config `pixel_ratio` must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
