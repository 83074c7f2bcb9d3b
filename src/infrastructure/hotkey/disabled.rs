//! No-op accelerator registry

use crate::application::ports::{AcceleratorError, AcceleratorRegistry};
use crate::domain::hotkey::Accelerator;

/// Refuses every registration, so the engine runs without global shortcuts
pub struct DisabledAcceleratorRegistry {
    reason: String,
}

impl DisabledAcceleratorRegistry {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for DisabledAcceleratorRegistry {
    fn default() -> Self {
        Self::new("disabled by configuration")
    }
}

impl AcceleratorRegistry for DisabledAcceleratorRegistry {
    fn register(&mut self, _accelerator: &Accelerator) -> Result<(), AcceleratorError> {
        Err(AcceleratorError::Unavailable(self.reason.clone()))
    }

    fn unregister_all(&mut self) {}
}
