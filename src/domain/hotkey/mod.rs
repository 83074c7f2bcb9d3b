//! Global hotkey domain module

mod accelerator;
mod action;

pub use accelerator::{Accelerator, Modifier};
pub use action::{
    default_toggle_candidates, slot_accelerator, slot_accelerators, HotkeyAction,
    DEFAULT_TOGGLE_CANDIDATES,
};
