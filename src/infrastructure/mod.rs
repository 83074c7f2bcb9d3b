//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS clipboard, global hotkeys, the presentation
//! bridge and the config file.

pub mod clipboard;
pub mod config;
pub mod display;
pub mod hotkey;
pub mod surface;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, WaylandClipboard};
pub use config::XdgConfigStore;
pub use display::ConfiguredDisplays;
pub use hotkey::{create_registry, DisabledAcceleratorRegistry, GlobalHotkeyRegistry};
pub use surface::{forward_requests, StdioSurfaceHost};
