//! Global accelerator port interface

use thiserror::Error;

use crate::domain::hotkey::Accelerator;

/// Accelerator registration errors
#[derive(Debug, Clone, Error)]
pub enum AcceleratorError {
    #[error("{0} is already claimed")]
    AlreadyClaimed(String),

    #[error("{accelerator} is not supported on this platform: {reason}")]
    Unsupported { accelerator: String, reason: String },

    #[error("Global hotkeys unavailable: {0}")]
    Unavailable(String),
}

/// Port for OS-wide keyboard shortcuts.
///
/// Fired accelerators are not reported through this trait; adapters forward
/// them to the event loop, which hands them to the router.
pub trait AcceleratorRegistry {
    /// Claim `accelerator` for this process.
    fn register(&mut self, accelerator: &Accelerator) -> Result<(), AcceleratorError>;

    /// Release every accelerator claimed so far.
    fn unregister_all(&mut self);
}

/// Blanket implementation for boxed registry types
impl AcceleratorRegistry for Box<dyn AcceleratorRegistry> {
    fn register(&mut self, accelerator: &Accelerator) -> Result<(), AcceleratorError> {
        self.as_mut().register(accelerator)
    }

    fn unregister_all(&mut self) {
        self.as_mut().unregister_all()
    }
}
