//! Display topology port interface

use thiserror::Error;

use crate::domain::display::{Display, DisplayId};

/// Display enumeration errors
#[derive(Debug, Clone, Error)]
pub enum DisplayError {
    #[error("Failed to enumerate displays: {0}")]
    EnumerationFailed(String),
}

/// Topology change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayChange {
    Added(Display),
    Removed(DisplayId),
}

/// Port for listing connected displays
pub trait DisplayProvider {
    /// All currently connected displays with their work areas
    fn displays(&self) -> Result<Vec<Display>, DisplayError>;
}
