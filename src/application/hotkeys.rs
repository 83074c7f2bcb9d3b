//! Global accelerator routing

use std::collections::HashMap;

use crate::domain::hotkey::{slot_accelerators, Accelerator, HotkeyAction};

use super::ports::AcceleratorRegistry;

/// Claims accelerators through the registry and maps fired ones to actions
pub struct HotkeyRouter<R: AcceleratorRegistry> {
    registry: R,
    toggle: Option<Accelerator>,
    routes: HashMap<Accelerator, HotkeyAction>,
}

impl<R: AcceleratorRegistry> HotkeyRouter<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            toggle: None,
            routes: HashMap::new(),
        }
    }

    /// Try `candidates` in order and keep the first that registers.
    ///
    /// Runs once; later calls return the already negotiated accelerator.
    /// `None` means every candidate was refused and the app runs without a
    /// toggle shortcut.
    pub fn negotiate_toggle(&mut self, candidates: &[Accelerator]) -> Option<&Accelerator> {
        if self.toggle.is_none() {
            for candidate in candidates {
                match self.registry.register(candidate) {
                    Ok(()) => {
                        log::info!("Toggle accelerator: {}", candidate);
                        self.routes
                            .insert(candidate.clone(), HotkeyAction::ToggleVisibility);
                        self.toggle = Some(candidate.clone());
                        break;
                    }
                    Err(e) => log::info!("Toggle candidate {} rejected: {}", candidate, e),
                }
            }
            if self.toggle.is_none() {
                log::warn!("No toggle accelerator could be registered");
            }
        }
        self.toggle.as_ref()
    }

    /// Register the quick-paste slot accelerators.
    ///
    /// Slots whose accelerator is already routed (e.g. chosen as the toggle)
    /// are skipped. Returns the number of slots bound.
    pub fn register_slots(&mut self) -> usize {
        let mut bound = 0;
        for (slot, accelerator) in slot_accelerators() {
            if self.routes.contains_key(&accelerator) {
                log::debug!("Slot {} shares {} with the toggle, skipping", slot, accelerator);
                continue;
            }
            match self.registry.register(&accelerator) {
                Ok(()) => {
                    self.routes.insert(accelerator, HotkeyAction::QuickPaste(slot));
                    bound += 1;
                }
                Err(e) => log::warn!("Slot {} accelerator unavailable: {}", slot, e),
            }
        }
        bound
    }

    pub fn toggle_accelerator(&self) -> Option<&Accelerator> {
        self.toggle.as_ref()
    }

    pub fn route(&self, accelerator: &Accelerator) -> Option<HotkeyAction> {
        self.routes.get(accelerator).copied()
    }

    pub fn release_all(&mut self) {
        self.registry.unregister_all();
        self.routes.clear();
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }
}
