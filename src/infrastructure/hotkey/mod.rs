//! Global accelerator adapters

mod disabled;
mod global;

pub use disabled::DisabledAcceleratorRegistry;
pub use global::GlobalHotkeyRegistry;

use tokio::sync::mpsc::UnboundedSender;

use crate::application::ports::AcceleratorRegistry;
use crate::domain::hotkey::Accelerator;

/// Create the accelerator registry.
///
/// Falls back to [`DisabledAcceleratorRegistry`] when hotkeys are turned
/// off or the platform refuses to give us a hotkey manager.
pub fn create_registry(
    enabled: bool,
    events: UnboundedSender<Accelerator>,
) -> Box<dyn AcceleratorRegistry> {
    if !enabled {
        return Box::new(DisabledAcceleratorRegistry::default());
    }

    match GlobalHotkeyRegistry::new(events) {
        Ok(registry) => Box::new(registry),
        Err(e) => {
            log::warn!("{}; continuing without global hotkeys", e);
            Box::new(DisabledAcceleratorRegistry::new(e.to_string()))
        }
    }
}
