//! Application layer - Core components and port interfaces
//!
//! Contains the clipboard engine, the components it drives, and the trait
//! definitions for external system interactions.

pub mod best_effort;
pub mod engine;
pub mod hotkeys;
pub mod ports;
pub mod selection;
pub mod surfaces;
pub mod watcher;

#[cfg(test)]
mod test_support;

// Re-export components
pub use engine::{ClipboardEngine, CoreEvent, EngineSettings};
pub use hotkeys::HotkeyRouter;
pub use selection::SelectionGateway;
pub use surfaces::DisplaySurfaceManager;
pub use watcher::ClipboardWatcher;
