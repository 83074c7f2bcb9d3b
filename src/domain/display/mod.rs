//! Display topology domain module

mod geometry;

pub use geometry::{Display, DisplayId, Rect, SURFACE_HEIGHT, SURFACE_MARGIN, SURFACE_WIDTH};
