//! Presentation surface port interface
//!
//! A surface is the floating panel shown on one display. The core never
//! renders anything itself: it creates surfaces, flips their visibility and
//! pushes [`SurfaceMessage`]s. Surfaces talk back through [`SurfaceEvent`]s
//! delivered on the event loop.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::clip::{ClipId, ClipRecord};
use crate::domain::display::{Display, Rect};

/// Surface errors
#[derive(Debug, Clone, Error)]
pub enum SurfaceError {
    #[error("Failed to create surface: {0}")]
    CreateFailed(String),

    #[error("Surface operation failed: {0}")]
    OperationFailed(String),

    #[error("Failed to deliver message to surface: {0}")]
    SendFailed(String),
}

/// Identity of one created surface.
///
/// Never reused, even when a display id is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Window style flags requested for every surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceStyle {
    pub borderless: bool,
    pub resizable: bool,
    pub movable: bool,
    pub skip_taskbar: bool,
    pub always_on_top: bool,
    pub transparent: bool,
    pub all_workspaces: bool,
}

impl SurfaceStyle {
    /// Borderless, fixed, always-on-top overlay visible everywhere
    pub const OVERLAY: Self = Self {
        borderless: true,
        resizable: false,
        movable: false,
        skip_taskbar: true,
        always_on_top: true,
        transparent: true,
        all_workspaces: true,
    };
}

/// Core-to-surface messages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum SurfaceMessage {
    HistoryUpdated(Vec<ClipRecord>),
    Highlight(ClipId),
    /// Hint text of the active toggle accelerator
    ToggleAcceleratorChanged(String),
    ContentProtectionChanged(bool),
}

/// Surface-to-core notifications and requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The surface finished loading and can receive state
    Ready(SurfaceId),
    /// The user picked a record
    Select(ClipId),
    /// The user flipped the content-protection switch
    SetContentProtection(bool),
    /// The host closed the surface on its own
    Closed(SurfaceId),
}

/// Handle to one presentation surface
pub trait Surface {
    fn show(&mut self) -> Result<(), SurfaceError>;

    /// Show without taking keyboard focus
    fn show_inactive(&mut self) -> Result<(), SurfaceError>;

    fn hide(&mut self) -> Result<(), SurfaceError>;

    fn is_visible(&self) -> bool;

    /// Exclude (or stop excluding) the surface from screen capture
    fn set_content_protection(&mut self, enabled: bool) -> Result<(), SurfaceError>;

    /// Deliver a message; fire-and-forget from the core's point of view
    fn send(&mut self, message: &SurfaceMessage) -> Result<(), SurfaceError>;

    fn close(&mut self) -> Result<(), SurfaceError>;
}

/// Port for creating surfaces
pub trait SurfaceFactory {
    type Surface: Surface;

    /// Create a hidden surface for `display` at `bounds`.
    ///
    /// The host reports [`SurfaceEvent::Ready`] for `id` once the surface can
    /// take messages.
    fn create_surface(
        &mut self,
        id: SurfaceId,
        display: &Display,
        bounds: Rect,
        style: SurfaceStyle,
    ) -> Result<Self::Surface, SurfaceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_serialize_kebab_case() {
        let msg = SurfaceMessage::Highlight(ClipId::from("abc"));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "highlight");
        assert_eq!(json["payload"], "abc");

        let msg = SurfaceMessage::ContentProtectionChanged(true);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "content-protection-changed");
        assert_eq!(json["payload"], true);
    }

    #[test]
    fn toggle_hint_message() {
        let msg = SurfaceMessage::ToggleAcceleratorChanged("Ctrl+Alt+F12".to_string());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "toggle-accelerator-changed");
        assert_eq!(json["payload"], "Ctrl+Alt+F12");
    }

    #[test]
    fn overlay_style_flags() {
        let style = SurfaceStyle::OVERLAY;
        assert!(style.borderless && style.always_on_top && style.skip_taskbar);
        assert!(!style.resizable && !style.movable);
    }
}
