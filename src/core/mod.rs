pub mod primitives;
pub mod types;

pub use types::{HitPoint, SeriesViewport};
