//! OS-wide accelerators via the global-hotkey crate

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use tokio::sync::mpsc::UnboundedSender;

use crate::application::ports::{AcceleratorError, AcceleratorRegistry};
use crate::domain::hotkey::Accelerator;

type Bindings = Arc<Mutex<HashMap<u32, Accelerator>>>;

/// Registry backed by [`GlobalHotKeyManager`].
///
/// Presses are read on a dedicated thread from the crate's global event
/// receiver and forwarded to the event loop as [`Accelerator`]s.
pub struct GlobalHotkeyRegistry {
    manager: GlobalHotKeyManager,
    registered: Vec<HotKey>,
    bindings: Bindings,
}

impl GlobalHotkeyRegistry {
    pub fn new(events: UnboundedSender<Accelerator>) -> Result<Self, AcceleratorError> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| AcceleratorError::Unavailable(e.to_string()))?;
        let bindings: Bindings = Arc::new(Mutex::new(HashMap::new()));

        spawn_listener(Arc::clone(&bindings), events)?;

        Ok(Self {
            manager,
            registered: Vec::new(),
            bindings,
        })
    }
}

fn spawn_listener(bindings: Bindings, events: UnboundedSender<Accelerator>) -> Result<(), AcceleratorError> {
    std::thread::Builder::new()
        .name("hotkey-listener".to_string())
        .spawn(move || {
            let receiver = GlobalHotKeyEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if event.state != HotKeyState::Pressed {
                    continue;
                }
                let accelerator = bindings
                    .lock()
                    .ok()
                    .and_then(|b| b.get(&event.id).cloned());
                let Some(accelerator) = accelerator else {
                    continue;
                };
                if events.send(accelerator).is_err() {
                    // event loop is gone
                    break;
                }
            }
        })
        .map(|_| ())
        .map_err(|e| AcceleratorError::Unavailable(format!("listener thread: {}", e)))
}

/// Convert to the crate's hotkey type; its parser accepts our canonical
/// `Control+Alt+F12` spelling.
fn to_hotkey(accelerator: &Accelerator) -> Result<HotKey, AcceleratorError> {
    HotKey::from_str(&accelerator.to_string()).map_err(|e| AcceleratorError::Unsupported {
        accelerator: accelerator.to_string(),
        reason: e.to_string(),
    })
}

impl AcceleratorRegistry for GlobalHotkeyRegistry {
    fn register(&mut self, accelerator: &Accelerator) -> Result<(), AcceleratorError> {
        let hotkey = to_hotkey(accelerator)?;

        self.manager.register(hotkey).map_err(|e| match e {
            global_hotkey::Error::AlreadyRegistered(_) => {
                AcceleratorError::AlreadyClaimed(accelerator.to_string())
            }
            other => AcceleratorError::Unsupported {
                accelerator: accelerator.to_string(),
                reason: other.to_string(),
            },
        })?;

        if let Ok(mut bindings) = self.bindings.lock() {
            bindings.insert(hotkey.id(), accelerator.clone());
        }
        self.registered.push(hotkey);
        log::debug!("Registered {}", accelerator);
        Ok(())
    }

    fn unregister_all(&mut self) {
        if let Err(e) = self.manager.unregister_all(&self.registered) {
            log::warn!("Failed to release global hotkeys: {}", e);
        }
        self.registered.clear();
        if let Ok(mut bindings) = self.bindings.lock() {
            bindings.clear();
        }
    }
}
