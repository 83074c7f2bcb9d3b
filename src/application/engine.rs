//! Clipboard engine
//!
//! Owns every piece of core state and reacts to one [`CoreEvent`] at a time.
//! The event loop in the CLI layer translates timer ticks, fired accelerators,
//! display changes and surface requests into events and feeds them to
//! [`ClipboardEngine::handle`].

use std::ops::ControlFlow;

use crate::domain::clip::{ClipId, ClipRecord, HistoryStore};
use crate::domain::hotkey::{Accelerator, HotkeyAction};

use super::hotkeys::HotkeyRouter;
use super::ports::{
    AcceleratorRegistry, Clipboard, DisplayChange, DisplayProvider, SurfaceEvent, SurfaceFactory,
};
use super::selection::SelectionGateway;
use super::surfaces::DisplaySurfaceManager;
use super::watcher::ClipboardWatcher;

/// Everything the core reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreEvent {
    /// Poll timer fired
    Tick,
    /// A registered global accelerator was pressed
    Accelerator(Accelerator),
    /// A display was connected or disconnected
    Topology(DisplayChange),
    /// A surface reported something
    Surface(SurfaceEvent),
    /// The application was re-activated (e.g. dock click)
    Activate,
    Shutdown,
}

/// Engine behaviour switches resolved from configuration
#[derive(Debug, Clone, Copy)]
pub struct EngineSettings {
    pub history_limit: usize,
    pub show_on_copy: bool,
    pub content_protection: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            history_limit: crate::domain::clip::MAX_CLIPS,
            show_on_copy: true,
            content_protection: false,
        }
    }
}

pub struct ClipboardEngine<C, R, F, D>
where
    C: Clipboard,
    R: AcceleratorRegistry,
    F: SurfaceFactory,
    D: DisplayProvider,
{
    clipboard: C,
    displays: D,
    history: HistoryStore,
    watcher: ClipboardWatcher,
    router: HotkeyRouter<R>,
    surfaces: DisplaySurfaceManager<F>,
    show_on_copy: bool,
}

impl<C, R, F, D> ClipboardEngine<C, R, F, D>
where
    C: Clipboard,
    R: AcceleratorRegistry,
    F: SurfaceFactory,
    D: DisplayProvider,
{
    pub fn new(
        clipboard: C,
        registry: R,
        factory: F,
        displays: D,
        settings: EngineSettings,
    ) -> Self {
        Self {
            clipboard,
            displays,
            history: HistoryStore::with_capacity(settings.history_limit),
            watcher: ClipboardWatcher::new(),
            router: HotkeyRouter::new(registry),
            surfaces: DisplaySurfaceManager::new(factory, settings.content_protection),
            show_on_copy: settings.show_on_copy,
        }
    }

    /// Bring the engine up: surfaces first, then accelerators, then the
    /// initial clipboard seed.
    pub async fn start(&mut self, toggle_candidates: &[Accelerator]) {
        let created = self.surfaces.rebuild_all(&self.displays);
        log::info!("Created {} surface(s)", created);

        if let Some(toggle) = self.router.negotiate_toggle(toggle_candidates).cloned() {
            self.surfaces.broadcast_toggle_accelerator(&toggle);
        }
        let slots = self.router.register_slots();
        log::info!("Bound {} quick-paste slot(s)", slots);

        if let Some(record) = self.watcher.seed(&self.clipboard, &mut self.history).await {
            self.announce(&record);
        }
    }

    /// React to one event. `Break` means the loop should stop.
    pub async fn handle(&mut self, event: CoreEvent) -> ControlFlow<()> {
        match event {
            CoreEvent::Tick => self.tick().await,
            CoreEvent::Accelerator(accelerator) => self.fire(&accelerator).await,
            CoreEvent::Topology(change) => self.on_topology(change),
            CoreEvent::Surface(event) => self.on_surface_event(event).await,
            CoreEvent::Activate => self.activate(),
            CoreEvent::Shutdown => {
                self.shutdown();
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    async fn tick(&mut self) {
        let Some(record) = self.watcher.poll(&self.clipboard, &mut self.history).await else {
            return;
        };
        self.announce(&record);
        if self.show_on_copy && !self.surfaces.any_visible() {
            self.surfaces.show_all_inactive();
        }
    }

    /// Broadcast the new history, then highlight the record that caused it.
    fn announce(&mut self, record: &ClipRecord) {
        self.surfaces.broadcast_update(self.history.list(self.history.len()));
        self.surfaces.broadcast_highlight(record.id());
    }

    async fn fire(&mut self, accelerator: &Accelerator) {
        match self.router.route(accelerator) {
            Some(HotkeyAction::ToggleVisibility) => {
                let visible = self.surfaces.toggle_all();
                log::debug!("Toggled surfaces, visible: {}", visible);
            }
            Some(HotkeyAction::QuickPaste(slot)) => {
                let Some(id) = self.history.slot_at(slot).map(|r| r.id().clone()) else {
                    log::debug!("Quick-paste slot {} is empty", slot);
                    return;
                };
                self.select(&id).await;
            }
            None => log::debug!("Unrouted accelerator {}", accelerator),
        }
    }

    fn on_topology(&mut self, change: DisplayChange) {
        match change {
            DisplayChange::Added(display) => {
                self.surfaces.add_for_display(&display);
            }
            DisplayChange::Removed(id) => {
                log::info!("Display {} removed, rebuilding surfaces", id);
                self.surfaces.rebuild_all(&self.displays);
            }
        }
    }

    async fn on_surface_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Ready(id) => {
                self.surfaces.on_surface_ready(
                    id,
                    self.router.toggle_accelerator(),
                    self.history.list(self.history.len()),
                );
            }
            SurfaceEvent::Select(id) => {
                self.select(&id).await;
            }
            SurfaceEvent::SetContentProtection(enabled) => self.set_content_protection(enabled),
            SurfaceEvent::Closed(id) => self.surfaces.on_surface_closed(id),
        }
    }

    fn activate(&mut self) {
        if self.surfaces.is_empty() {
            log::info!("No surfaces on activation, rebuilding");
            self.surfaces.rebuild_all(&self.displays);
        }
    }

    /// Put a history record back on the clipboard. Returns whether the
    /// clipboard was written.
    pub async fn select(&mut self, id: &ClipId) -> bool {
        SelectionGateway {
            clipboard: &self.clipboard,
            history: &self.history,
            watcher: &mut self.watcher,
            surfaces: &mut self.surfaces,
        }
        .select(id)
        .await
    }

    /// Release accelerators and close every surface.
    pub fn shutdown(&mut self) {
        log::info!("Shutting down");
        self.router.release_all();
        self.surfaces.close_all();
    }

    pub fn history(&self) -> &[ClipRecord] {
        self.history.list(self.history.len())
    }

    pub fn toggle_accelerator(&self) -> Option<&Accelerator> {
        self.router.toggle_accelerator()
    }

    pub fn content_protection(&self) -> bool {
        self.surfaces.content_protection()
    }

    pub fn set_content_protection(&mut self, enabled: bool) {
        log::info!("Content protection: {}", enabled);
        self.surfaces.set_content_protection(enabled);
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn surfaces(&self) -> &DisplaySurfaceManager<F> {
        &self.surfaces
    }

    pub fn router(&self) -> &HotkeyRouter<R> {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SurfaceMessage;
    use crate::application::test_support::{
        display, MockClipboard, MockDisplays, MockRegistry, MockSurfaceFactory, SurfaceCall,
    };
    use crate::domain::display::DisplayId;
    use crate::domain::hotkey::{default_toggle_candidates, slot_accelerator};

    type TestEngine = ClipboardEngine<MockClipboard, MockRegistry, MockSurfaceFactory, MockDisplays>;

    fn engine_with(clipboard: MockClipboard, registry: MockRegistry, displays: MockDisplays) -> TestEngine {
        ClipboardEngine::new(
            clipboard,
            registry,
            MockSurfaceFactory::default(),
            displays,
            EngineSettings::default(),
        )
    }

    fn engine() -> TestEngine {
        engine_with(
            MockClipboard::default(),
            MockRegistry::default(),
            MockDisplays::new(vec![display(1, 0, 1920)]),
        )
    }

    fn accel(s: &str) -> Accelerator {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn start_seeds_history_without_showing() {
        let mut engine = engine_with(
            MockClipboard::with_text("seed"),
            MockRegistry::default(),
            MockDisplays::new(vec![display(1, 0, 1920)]),
        );

        engine.start(&default_toggle_candidates()).await;

        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.history()[0].text(), "seed");
        assert!(!engine.surfaces().any_visible());
        assert_eq!(engine.surfaces().factory().log.highlights().len(), 1);
    }

    #[tokio::test]
    async fn tick_captures_and_shows_inactive() {
        let mut engine = engine();
        engine.start(&default_toggle_candidates()).await;

        engine.clipboard().set("copied");
        engine.handle(CoreEvent::Tick).await;

        assert_eq!(engine.history()[0].text(), "copied");
        let log = &engine.surfaces().factory().log;
        assert_eq!(log.count(|c| matches!(c, SurfaceCall::ShowInactive(_))), 1);

        let messages = log.messages();
        let n = messages.len();
        assert!(matches!(messages[n - 2].1, SurfaceMessage::HistoryUpdated(_)));
        assert!(matches!(messages[n - 1].1, SurfaceMessage::Highlight(_)));
    }

    #[tokio::test]
    async fn show_on_copy_disabled() {
        let mut engine = ClipboardEngine::new(
            MockClipboard::default(),
            MockRegistry::default(),
            MockSurfaceFactory::default(),
            MockDisplays::new(vec![display(1, 0, 1920)]),
            EngineSettings {
                show_on_copy: false,
                ..Default::default()
            },
        );
        engine.start(&[]).await;

        engine.clipboard().set("quiet");
        engine.handle(CoreEvent::Tick).await;

        assert_eq!(engine.history().len(), 1);
        assert!(!engine.surfaces().any_visible());
    }

    #[tokio::test]
    async fn unchanged_clipboard_tick_is_silent() {
        let mut engine = engine_with(
            MockClipboard::with_text("same"),
            MockRegistry::default(),
            MockDisplays::new(vec![display(1, 0, 1920)]),
        );
        engine.start(&[]).await;
        engine.surfaces().factory().log.clear();

        engine.handle(CoreEvent::Tick).await;

        assert!(engine.surfaces().factory().log.calls().is_empty());
    }

    #[tokio::test]
    async fn negotiated_toggle_reaches_new_surfaces() {
        let mut engine = engine_with(
            MockClipboard::default(),
            MockRegistry::claimed(&["Control+Alt+F12"]),
            MockDisplays::new(vec![display(1, 0, 1920)]),
        );
        engine
            .start(&[
                accel("Control+Alt+F12"),
                accel("Control+Shift+F12"),
                accel("Control+Alt+V"),
            ])
            .await;
        assert_eq!(engine.toggle_accelerator(), Some(&accel("Control+Shift+F12")));

        engine
            .handle(CoreEvent::Topology(DisplayChange::Added(display(2, 1920, 1920))))
            .await;
        let new_surface = engine.surfaces().surface_for(DisplayId(2)).unwrap();
        engine
            .handle(CoreEvent::Surface(SurfaceEvent::Ready(new_surface)))
            .await;

        let hints: Vec<_> = engine
            .surfaces()
            .factory()
            .log
            .messages()
            .into_iter()
            .filter_map(|(id, m)| match m {
                SurfaceMessage::ToggleAcceleratorChanged(hint) if id == new_surface => Some(hint),
                _ => None,
            })
            .collect();
        assert_eq!(hints, vec!["Ctrl+Shift+F12".to_string()]);
    }

    #[tokio::test]
    async fn toggle_hides_and_shows_everything() {
        let mut engine = engine_with(
            MockClipboard::default(),
            MockRegistry::default(),
            MockDisplays::new(vec![display(1, 0, 1920), display(2, 1920, 1920)]),
        );
        engine.start(&[accel("Control+Alt+F12")]).await;

        engine
            .handle(CoreEvent::Accelerator(accel("Control+Alt+F12")))
            .await;
        assert!(engine.surfaces().any_visible());
        let log = &engine.surfaces().factory().log;
        assert_eq!(log.count(|c| matches!(c, SurfaceCall::Show(_))), 2);

        engine
            .handle(CoreEvent::Accelerator(accel("Control+Alt+F12")))
            .await;
        assert!(!engine.surfaces().any_visible());
    }

    #[tokio::test]
    async fn quick_paste_writes_slot_text() {
        let mut engine = engine();
        engine.start(&default_toggle_candidates()).await;
        for text in ["one", "two", "three"] {
            engine.clipboard().set(text);
            engine.handle(CoreEvent::Tick).await;
        }

        engine
            .handle(CoreEvent::Accelerator(slot_accelerator(2)))
            .await;

        assert_eq!(engine.clipboard().writes(), vec!["two".to_string()]);
        // the write is not re-captured
        engine.handle(CoreEvent::Tick).await;
        assert_eq!(engine.history().len(), 3);
        assert_eq!(engine.history()[0].text(), "three");
    }

    #[tokio::test]
    async fn quick_paste_empty_slot_is_noop() {
        let mut engine = engine();
        engine.start(&default_toggle_candidates()).await;
        engine.surfaces().factory().log.clear();

        engine
            .handle(CoreEvent::Accelerator(slot_accelerator(4)))
            .await;

        assert!(engine.clipboard().writes().is_empty());
        assert!(engine.surfaces().factory().log.messages().is_empty());
    }

    #[tokio::test]
    async fn surface_select_unknown_id() {
        let mut engine = engine();
        engine.start(&[]).await;
        engine.surfaces().factory().log.clear();

        engine
            .handle(CoreEvent::Surface(SurfaceEvent::Select(ClipId::from("nope"))))
            .await;

        assert!(engine.clipboard().writes().is_empty());
        assert!(engine.surfaces().factory().log.calls().is_empty());
    }

    #[tokio::test]
    async fn display_removal_rebuilds_fleet() {
        let displays = MockDisplays::new(vec![display(1, 0, 1920), display(2, 1920, 1920)]);
        let mut engine = engine_with(MockClipboard::default(), MockRegistry::default(), displays.clone());
        engine.start(&[]).await;
        assert_eq!(engine.surfaces().len(), 2);

        displays.disconnect(DisplayId(2));
        engine
            .handle(CoreEvent::Topology(DisplayChange::Removed(DisplayId(2))))
            .await;

        assert_eq!(engine.surfaces().len(), 1);
        assert_eq!(
            engine.surfaces().bounds_for(DisplayId(1)).map(|b| (b.x, b.y)),
            Some((1544, 544))
        );
    }

    #[tokio::test]
    async fn activate_rebuilds_only_when_empty() {
        let mut engine = engine();
        engine.start(&[]).await;
        let before = engine.surfaces().surface_for(DisplayId(1));

        engine.handle(CoreEvent::Activate).await;
        assert_eq!(engine.surfaces().surface_for(DisplayId(1)), before);

        engine
            .handle(CoreEvent::Surface(SurfaceEvent::Closed(before.unwrap())))
            .await;
        assert!(engine.surfaces().is_empty());

        engine.handle(CoreEvent::Activate).await;
        assert_eq!(engine.surfaces().len(), 1);
    }

    #[tokio::test]
    async fn content_protection_request_from_surface() {
        let mut engine = engine();
        engine.start(&[]).await;

        engine
            .handle(CoreEvent::Surface(SurfaceEvent::SetContentProtection(true)))
            .await;

        assert!(engine.content_protection());
    }

    #[tokio::test]
    async fn shutdown_breaks_and_releases() {
        let mut engine = engine();
        engine.start(&default_toggle_candidates()).await;

        let flow = engine.handle(CoreEvent::Shutdown).await;

        assert!(flow.is_break());
        assert!(engine.router().registry().released);
        assert!(engine.surfaces().is_empty());
    }
}
