//! Hand-written port doubles shared by the application unit tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{
    AcceleratorError, AcceleratorRegistry, Clipboard, ClipboardError, DisplayError,
    DisplayProvider, Surface, SurfaceError, SurfaceFactory, SurfaceId, SurfaceMessage,
    SurfaceStyle,
};
use crate::domain::display::{Display, DisplayId, Rect};
use crate::domain::hotkey::Accelerator;

pub fn display(id: u32, x: i32, width: i32) -> Display {
    Display::new(DisplayId(id), Rect::new(x, 0, width, 1040))
}

// ---- clipboard ----

#[derive(Default)]
pub struct MockClipboard {
    content: Mutex<String>,
    writes: Mutex<Vec<String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockClipboard {
    pub fn with_text(text: &str) -> Self {
        let clipboard = Self::default();
        clipboard.set(text);
        clipboard
    }

    /// Simulate another application copying `text`
    pub fn set(&self, text: &str) {
        *self.content.lock().unwrap() = text.to_string();
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Clipboard for MockClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ClipboardError::ReadFailed("locked".to_string()));
        }
        Ok(self.content.lock().unwrap().clone())
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ClipboardError::CopyFailed("locked".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        *self.content.lock().unwrap() = text.to_string();
        Ok(())
    }
}

// ---- surfaces ----

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Created(SurfaceId, DisplayId, Rect),
    Show(SurfaceId),
    ShowInactive(SurfaceId),
    Hide(SurfaceId),
    ContentProtection(SurfaceId, bool),
    Message(SurfaceId, SurfaceMessage),
    Closed(SurfaceId),
}

#[derive(Debug, Clone, Default)]
pub struct SurfaceLog(Arc<Mutex<Vec<SurfaceCall>>>);

impl SurfaceLog {
    fn push(&self, call: SurfaceCall) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    pub fn messages(&self) -> Vec<(SurfaceId, SurfaceMessage)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                SurfaceCall::Message(id, m) => Some((id, m)),
                _ => None,
            })
            .collect()
    }

    pub fn highlights(&self) -> Vec<(SurfaceId, String)> {
        self.messages()
            .into_iter()
            .filter_map(|(id, m)| match m {
                SurfaceMessage::Highlight(clip) => Some((id, clip.to_string())),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls().iter().filter(|c| predicate(c)).count()
    }
}

pub struct MockSurface {
    id: SurfaceId,
    visible: bool,
    broken: bool,
    log: SurfaceLog,
}

impl MockSurface {
    fn check(&self) -> Result<(), SurfaceError> {
        if self.broken {
            return Err(SurfaceError::OperationFailed("window gone".to_string()));
        }
        Ok(())
    }
}

impl Surface for MockSurface {
    fn show(&mut self) -> Result<(), SurfaceError> {
        self.check()?;
        self.visible = true;
        self.log.push(SurfaceCall::Show(self.id));
        Ok(())
    }

    fn show_inactive(&mut self) -> Result<(), SurfaceError> {
        self.check()?;
        self.visible = true;
        self.log.push(SurfaceCall::ShowInactive(self.id));
        Ok(())
    }

    fn hide(&mut self) -> Result<(), SurfaceError> {
        self.check()?;
        self.visible = false;
        self.log.push(SurfaceCall::Hide(self.id));
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_content_protection(&mut self, enabled: bool) -> Result<(), SurfaceError> {
        self.log.push(SurfaceCall::ContentProtection(self.id, enabled));
        Ok(())
    }

    fn send(&mut self, message: &SurfaceMessage) -> Result<(), SurfaceError> {
        self.check()?;
        self.log.push(SurfaceCall::Message(self.id, message.clone()));
        Ok(())
    }

    fn close(&mut self) -> Result<(), SurfaceError> {
        self.visible = false;
        self.log.push(SurfaceCall::Closed(self.id));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockSurfaceFactory {
    pub log: SurfaceLog,
    /// Creation fails on these displays
    pub failing_displays: Vec<DisplayId>,
    /// Surfaces on these displays are created but fail show, hide and send
    pub broken_displays: Vec<DisplayId>,
}

impl SurfaceFactory for MockSurfaceFactory {
    type Surface = MockSurface;

    fn create_surface(
        &mut self,
        id: SurfaceId,
        display: &Display,
        bounds: Rect,
        _style: SurfaceStyle,
    ) -> Result<MockSurface, SurfaceError> {
        if self.failing_displays.contains(&display.id) {
            return Err(SurfaceError::CreateFailed("no GPU".to_string()));
        }
        self.log.push(SurfaceCall::Created(id, display.id, bounds));
        Ok(MockSurface {
            id,
            visible: false,
            broken: self.broken_displays.contains(&display.id),
            log: self.log.clone(),
        })
    }
}

// ---- displays ----

/// Display list shared between the test and the engine that owns a clone
#[derive(Clone, Default)]
pub struct MockDisplays {
    displays: Arc<Mutex<Vec<Display>>>,
    fail: Arc<AtomicBool>,
}

impl MockDisplays {
    pub fn new(displays: Vec<Display>) -> Self {
        Self {
            displays: Arc::new(Mutex::new(displays)),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn failing(displays: Vec<Display>) -> Self {
        let provider = Self::new(displays);
        provider.fail.store(true, Ordering::SeqCst);
        provider
    }

    pub fn connect(&self, display: Display) {
        self.displays.lock().unwrap().push(display);
    }

    pub fn disconnect(&self, id: DisplayId) {
        self.displays.lock().unwrap().retain(|d| d.id != id);
    }
}

impl DisplayProvider for MockDisplays {
    fn displays(&self) -> Result<Vec<Display>, DisplayError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DisplayError::EnumerationFailed("no session".to_string()));
        }
        Ok(self.displays.lock().unwrap().clone())
    }
}

// ---- accelerators ----

#[derive(Default)]
pub struct MockRegistry {
    pub claimed_elsewhere: Vec<Accelerator>,
    pub registered: Vec<Accelerator>,
    pub released: bool,
}

impl MockRegistry {
    pub fn claimed(accelerators: &[&str]) -> Self {
        Self {
            claimed_elsewhere: accelerators.iter().map(|s| s.parse().unwrap()).collect(),
            ..Default::default()
        }
    }
}

impl AcceleratorRegistry for MockRegistry {
    fn register(&mut self, accelerator: &Accelerator) -> Result<(), AcceleratorError> {
        if self.claimed_elsewhere.contains(accelerator) || self.registered.contains(accelerator) {
            return Err(AcceleratorError::AlreadyClaimed(accelerator.to_string()));
        }
        self.registered.push(accelerator.clone());
        Ok(())
    }

    fn unregister_all(&mut self) {
        self.registered.clear();
        self.released = true;
    }
}
