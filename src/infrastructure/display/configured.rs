//! Display list from configuration

use std::sync::{Arc, Mutex};

use crate::application::ports::{DisplayChange, DisplayError, DisplayProvider};
use crate::domain::display::{Display, DisplayId, Rect};

/// Work area assumed when no displays are configured
pub const FALLBACK_WORK_AREA: Rect = Rect::new(0, 0, 1920, 1040);

/// Displays declared in the `[[displays]]` config table.
///
/// Clones share one list, so topology changes applied by the surface bridge
/// are seen by the engine's next enumeration.
#[derive(Debug, Clone)]
pub struct ConfiguredDisplays {
    displays: Arc<Mutex<Vec<Display>>>,
}

impl ConfiguredDisplays {
    /// Use `displays`, or a single fallback display if the list is empty.
    pub fn new(displays: Vec<Display>) -> Self {
        let displays = if displays.is_empty() {
            vec![Display::new(DisplayId(1), FALLBACK_WORK_AREA)]
        } else {
            displays
        };
        Self {
            displays: Arc::new(Mutex::new(displays)),
        }
    }

    /// Record a topology change before it is announced to the engine.
    pub fn apply(&self, change: DisplayChange) {
        let Ok(mut displays) = self.displays.lock() else {
            return;
        };
        match change {
            DisplayChange::Added(display) => {
                displays.retain(|d| d.id != display.id);
                displays.push(display);
            }
            DisplayChange::Removed(id) => displays.retain(|d| d.id != id),
        }
    }
}

impl Default for ConfiguredDisplays {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl DisplayProvider for ConfiguredDisplays {
    fn displays(&self) -> Result<Vec<Display>, DisplayError> {
        self.displays
            .lock()
            .map(|d| d.clone())
            .map_err(|e| DisplayError::EnumerationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_single_display() {
        let provider = ConfiguredDisplays::default();
        let displays = provider.displays().unwrap();
        assert_eq!(displays.len(), 1);
        assert_eq!(displays[0].work_area, FALLBACK_WORK_AREA);
    }

    #[test]
    fn changes_visible_through_clones() {
        let provider = ConfiguredDisplays::default();
        let bridge = provider.clone();

        bridge.apply(DisplayChange::Added(Display::new(
            DisplayId(2),
            Rect::new(1920, 0, 1920, 1080),
        )));
        assert_eq!(provider.displays().unwrap().len(), 2);

        bridge.apply(DisplayChange::Removed(DisplayId(1)));
        let displays = provider.displays().unwrap();
        assert_eq!(displays.len(), 1);
        assert_eq!(displays[0].id, DisplayId(2));
    }

    #[test]
    fn re_adding_replaces_work_area() {
        let provider = ConfiguredDisplays::default();
        provider.apply(DisplayChange::Added(Display::new(
            DisplayId(1),
            Rect::new(0, 0, 2560, 1400),
        )));

        let displays = provider.displays().unwrap();
        assert_eq!(displays.len(), 1);
        assert_eq!(displays[0].work_area.width, 2560);
    }
}
