//! Per-display surface fleet
//!
//! Exactly one surface per connected display, keyed by display id. Every
//! broadcast fans out to all live surfaces; platform failures on one surface
//! never stop the others.

use std::collections::BTreeMap;

use crate::domain::clip::{ClipId, ClipRecord};
use crate::domain::display::{Display, DisplayId, Rect};
use crate::domain::hotkey::Accelerator;

use super::best_effort::best_effort;
use super::ports::{
    DisplayProvider, Surface, SurfaceFactory, SurfaceId, SurfaceMessage, SurfaceStyle,
};

struct ManagedSurface<S> {
    id: SurfaceId,
    bounds: Rect,
    handle: S,
}

/// Owns every live surface and the content-protection flag they share
pub struct DisplaySurfaceManager<F: SurfaceFactory> {
    factory: F,
    surfaces: BTreeMap<DisplayId, ManagedSurface<F::Surface>>,
    next_id: u64,
    content_protection: bool,
}

impl<F: SurfaceFactory> DisplaySurfaceManager<F> {
    pub fn new(factory: F, content_protection: bool) -> Self {
        Self {
            factory,
            surfaces: BTreeMap::new(),
            next_id: 1,
            content_protection,
        }
    }

    /// Close the whole fleet and create one surface per display the
    /// provider currently reports. Returns the number of surfaces created.
    pub fn rebuild_all<D: DisplayProvider>(&mut self, provider: &D) -> usize {
        self.close_all();

        let Some(displays) = best_effort("Display enumeration", provider.displays()) else {
            return 0;
        };

        displays
            .iter()
            .filter_map(|display| self.add_for_display(display))
            .count()
    }

    /// Create a surface for a newly connected display.
    ///
    /// A display that already has a surface at the same bounds is left
    /// alone. If its work area moved, the old surface is closed and replaced.
    pub fn add_for_display(&mut self, display: &Display) -> Option<SurfaceId> {
        let bounds = display.surface_bounds();

        if let Some(existing) = self.surfaces.get(&display.id) {
            if existing.bounds == bounds {
                log::debug!("Display {} already has a surface", display.id);
                return None;
            }
            log::info!(
                "Display {} work area changed, replacing surface {}",
                display.id,
                existing.id
            );
            if let Some(mut stale) = self.surfaces.remove(&display.id) {
                best_effort("Surface close", stale.handle.close());
            }
        }

        let id = SurfaceId(self.next_id);
        self.next_id += 1;

        let mut handle = best_effort(
            "Surface creation",
            self.factory
                .create_surface(id, display, bounds, SurfaceStyle::OVERLAY),
        )?;

        if self.content_protection {
            best_effort("Content protection", handle.set_content_protection(true));
        }

        log::info!(
            "Surface {} created on display {} at ({}, {})",
            id,
            display.id,
            bounds.x,
            bounds.y
        );
        self.surfaces
            .insert(display.id, ManagedSurface { id, bounds, handle });
        Some(id)
    }

    /// Forget a surface the host closed on its own.
    ///
    /// Only the entry whose surface id matches is dropped, so a late close
    /// for a surface that was already replaced is harmless.
    pub fn on_surface_closed(&mut self, id: SurfaceId) {
        let display = self
            .surfaces
            .iter()
            .find(|(_, s)| s.id == id)
            .map(|(display, _)| *display);

        match display {
            Some(display) => {
                self.surfaces.remove(&display);
                log::info!("Surface {} closed by host", id);
            }
            None => log::debug!("Close for unknown surface {}", id),
        }
    }

    /// Bring a freshly loaded surface up to date.
    pub fn on_surface_ready(
        &mut self,
        id: SurfaceId,
        toggle: Option<&Accelerator>,
        history: &[ClipRecord],
    ) {
        let content_protection = self.content_protection;
        let Some(surface) = self.surfaces.values_mut().find(|s| s.id == id) else {
            log::debug!("Ready from unknown surface {}", id);
            return;
        };

        if let Some(toggle) = toggle {
            let message = SurfaceMessage::ToggleAcceleratorChanged(toggle.hint());
            best_effort("Surface send", surface.handle.send(&message));
        }
        best_effort(
            "Surface send",
            surface
                .handle
                .send(&SurfaceMessage::ContentProtectionChanged(content_protection)),
        );
        best_effort(
            "Surface send",
            surface
                .handle
                .send(&SurfaceMessage::HistoryUpdated(history.to_vec())),
        );
    }

    pub fn broadcast_update(&mut self, records: &[ClipRecord]) {
        self.broadcast(&SurfaceMessage::HistoryUpdated(records.to_vec()));
    }

    pub fn broadcast_highlight(&mut self, id: &ClipId) {
        self.broadcast(&SurfaceMessage::Highlight(id.clone()));
    }

    pub fn broadcast_toggle_accelerator(&mut self, accelerator: &Accelerator) {
        self.broadcast(&SurfaceMessage::ToggleAcceleratorChanged(accelerator.hint()));
    }

    fn broadcast(&mut self, message: &SurfaceMessage) {
        for surface in self.surfaces.values_mut() {
            best_effort("Surface send", surface.handle.send(message));
        }
    }

    pub fn any_visible(&self) -> bool {
        self.surfaces.values().any(|s| s.handle.is_visible())
    }

    pub fn show_all(&mut self) {
        for surface in self.surfaces.values_mut() {
            best_effort("Surface show", surface.handle.show());
        }
    }

    /// Show every surface without stealing focus from the active app
    pub fn show_all_inactive(&mut self) {
        for surface in self.surfaces.values_mut() {
            best_effort("Surface show", surface.handle.show_inactive());
        }
    }

    pub fn hide_all(&mut self) {
        for surface in self.surfaces.values_mut() {
            best_effort("Surface hide", surface.handle.hide());
        }
    }

    /// Hide everything if anything is visible, otherwise show everything.
    /// Returns whether the fleet is visible afterwards.
    pub fn toggle_all(&mut self) -> bool {
        if self.any_visible() {
            self.hide_all();
            false
        } else {
            self.show_all();
            true
        }
    }

    pub fn content_protection(&self) -> bool {
        self.content_protection
    }

    /// Apply the flag to every surface and echo it back to all of them.
    pub fn set_content_protection(&mut self, enabled: bool) {
        self.content_protection = enabled;
        for surface in self.surfaces.values_mut() {
            best_effort(
                "Content protection",
                surface.handle.set_content_protection(enabled),
            );
        }
        self.broadcast(&SurfaceMessage::ContentProtectionChanged(enabled));
    }

    pub fn close_all(&mut self) {
        for (_, mut surface) in std::mem::take(&mut self.surfaces) {
            best_effort("Surface close", surface.handle.close());
        }
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn surface_for(&self, display: DisplayId) -> Option<SurfaceId> {
        self.surfaces.get(&display).map(|s| s.id)
    }

    pub fn bounds_for(&self, display: DisplayId) -> Option<Rect> {
        self.surfaces.get(&display).map(|s| s.bounds)
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}
