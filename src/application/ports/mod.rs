//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod accelerator;
pub mod clipboard;
pub mod config;
pub mod display;
pub mod surface;

// Re-export common types
pub use accelerator::{AcceleratorError, AcceleratorRegistry};
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use display::{DisplayChange, DisplayError, DisplayProvider};
pub use surface::{
    Surface, SurfaceError, SurfaceEvent, SurfaceFactory, SurfaceId, SurfaceMessage, SurfaceStyle,
};
