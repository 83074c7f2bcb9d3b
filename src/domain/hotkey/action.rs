//! Hotkey actions and the built-in accelerator tables

use std::fmt;

use crate::domain::clip::VISIBLE_SLOTS;

use super::accelerator::{Accelerator, Modifier};

/// Toggle accelerators tried in order at startup until one registers
pub const DEFAULT_TOGGLE_CANDIDATES: &[&str] = &[
    "Control+Alt+F12",
    "Control+Shift+F12",
    "Control+Alt+F11",
    "Control+Alt+V",
];

/// What a global accelerator does when fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotkeyAction {
    /// Show every surface, or hide them all if any is visible
    ToggleVisibility,
    /// Put the record at this 1-based history position back on the clipboard
    QuickPaste(usize),
}

impl fmt::Display for HotkeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToggleVisibility => write!(f, "toggle"),
            Self::QuickPaste(slot) => write!(f, "quick-paste {}", slot),
        }
    }
}

/// Fixed accelerator for quick-paste slot `n` (Control+Alt+F<n>)
pub fn slot_accelerator(n: usize) -> Accelerator {
    Accelerator::new(&[Modifier::Control, Modifier::Alt], format!("F{}", n))
}

/// Accelerators for slots 1..=VISIBLE_SLOTS, in slot order
pub fn slot_accelerators() -> Vec<(usize, Accelerator)> {
    (1..=VISIBLE_SLOTS).map(|n| (n, slot_accelerator(n))).collect()
}

/// Parsed default toggle candidates
pub fn default_toggle_candidates() -> Vec<Accelerator> {
    DEFAULT_TOGGLE_CANDIDATES
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect()
}
