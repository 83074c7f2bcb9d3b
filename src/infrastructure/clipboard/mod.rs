//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard (primary)
//! or wl-clipboard on Wayland sessions where arboard cannot see the
//! selection.

mod arboard;
mod wayland;

pub use arboard::ArboardClipboard;
pub use wayland::WaylandClipboard;

use crate::application::ports::Clipboard;

/// Create the clipboard adapter named by `backend` ("arboard" or "wayland").
///
/// Unknown names fall back to arboard with a warning.
pub fn create_clipboard(backend: &str) -> Box<dyn Clipboard> {
    match backend.to_lowercase().as_str() {
        "wayland" | "wl-clipboard" => Box::new(WaylandClipboard::new()),
        "arboard" => Box::new(ArboardClipboard::new()),
        other => {
            log::warn!("Unknown clipboard backend '{}', using arboard", other);
            Box::new(ArboardClipboard::new())
        }
    }
}
