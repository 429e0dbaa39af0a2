use serde::{Deserialize, Serialize};

use crate::core::SeriesViewport;
use crate::interaction::ChartOrientation;

use super::TooltipCandidate;

/// Screen axis along which rollover tooltips are distributed.
///
/// Resolved once per layout pass from the chart orientation and passed
/// through every sub-operation; it selects which candidate fields
/// (coordinate, size, shift) and which viewport extent apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionAxis {
    Horizontal,
    Vertical,
}

impl PositionAxis {
    /// Vertical charts spread tooltips along the horizontal pixel axis and
    /// horizontal charts along the vertical one.
    #[must_use]
    pub fn for_orientation(orientation: ChartOrientation) -> Self {
        match orientation {
            ChartOrientation::Vertical => PositionAxis::Horizontal,
            ChartOrientation::Horizontal => PositionAxis::Vertical,
        }
    }

    #[must_use]
    pub fn coord(self, candidate: &TooltipCandidate) -> f64 {
        match self {
            PositionAxis::Horizontal => candidate.x_coord,
            PositionAxis::Vertical => candidate.y_coord,
        }
    }

    #[must_use]
    pub fn cross_coord(self, candidate: &TooltipCandidate) -> f64 {
        match self {
            PositionAxis::Horizontal => candidate.y_coord,
            PositionAxis::Vertical => candidate.x_coord,
        }
    }

    #[must_use]
    pub fn size_px(self, candidate: &TooltipCandidate) -> f64 {
        match self {
            PositionAxis::Horizontal => candidate.width_px,
            PositionAxis::Vertical => candidate.height_px,
        }
    }

    #[must_use]
    pub fn shift(self, candidate: &TooltipCandidate) -> f64 {
        match self {
            PositionAxis::Horizontal => candidate.x_shift,
            PositionAxis::Vertical => candidate.y_shift,
        }
    }

    pub fn set_shift(self, candidate: &mut TooltipCandidate, shift: f64) {
        match self {
            PositionAxis::Horizontal => candidate.x_shift = shift,
            PositionAxis::Vertical => candidate.y_shift = shift,
        }
    }

    #[must_use]
    pub fn viewport_extent(self, viewport: SeriesViewport) -> f64 {
        match self {
            PositionAxis::Horizontal => viewport.width,
            PositionAxis::Vertical => viewport.height,
        }
    }
}
