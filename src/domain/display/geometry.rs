//! Display and surface geometry

use std::fmt;

use serde::{Deserialize, Serialize};

/// Surface width in logical units
pub const SURFACE_WIDTH: i32 = 360;

/// Surface height in logical units
pub const SURFACE_HEIGHT: i32 = 480;

/// Gap between the surface and the work-area edges
pub const SURFACE_MARGIN: i32 = 16;

/// Stable identifier the host assigns to a physical display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayId(pub u32);

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Axis-aligned rectangle in logical units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A connected physical display and its usable work area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    pub id: DisplayId,
    pub work_area: Rect,
}

impl Display {
    pub const fn new(id: DisplayId, work_area: Rect) -> Self {
        Self { id, work_area }
    }

    /// Bounds of the panel anchored to the bottom-right corner of the work area.
    ///
    /// Saturates at the `i32` range instead of overflowing.
    pub fn surface_bounds(&self) -> Rect {
        let wa = self.work_area;
        Rect::new(
            wa.x.saturating_add(wa.width)
                .saturating_sub(SURFACE_WIDTH + SURFACE_MARGIN),
            wa.y.saturating_add(wa.height)
                .saturating_sub(SURFACE_HEIGHT + SURFACE_MARGIN),
            SURFACE_WIDTH,
            SURFACE_HEIGHT,
        )
    }
}
