//! Domain layer - Core state and value objects
//!
//! Contains the clip history, accelerators, display geometry and
//! configuration. This layer has no dependencies on external systems.

pub mod clip;
pub mod config;
pub mod display;
pub mod error;
pub mod hotkey;
pub mod interval;

// Re-export common types
pub use clip::{ClipId, ClipRecord, HistoryStore, MAX_CLIPS, VISIBLE_SLOTS};
pub use config::AppConfig;
pub use display::{Display, DisplayId, Rect};
pub use error::*;
pub use hotkey::{Accelerator, HotkeyAction};
pub use interval::PollInterval;
