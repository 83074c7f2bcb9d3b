//! Display topology adapters

mod configured;

pub use configured::{ConfiguredDisplays, FALLBACK_WORK_AREA};
