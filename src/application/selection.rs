//! Putting a history record back on the clipboard

use crate::domain::clip::{ClipId, HistoryStore};

use super::best_effort::best_effort;
use super::ports::{Clipboard, SurfaceFactory};
use super::surfaces::DisplaySurfaceManager;
use super::watcher::ClipboardWatcher;

/// Borrows the pieces a selection touches for the duration of one request
pub struct SelectionGateway<'a, C: Clipboard, F: SurfaceFactory> {
    pub clipboard: &'a C,
    pub history: &'a HistoryStore,
    pub watcher: &'a mut ClipboardWatcher,
    pub surfaces: &'a mut DisplaySurfaceManager<F>,
}

impl<C: Clipboard, F: SurfaceFactory> SelectionGateway<'_, C, F> {
    /// Write the record's text to the clipboard and highlight it everywhere.
    ///
    /// Unknown ids are ignored. History order is untouched; the write is
    /// marked observed so the watcher does not re-capture it. Returns
    /// whether the clipboard was written.
    pub async fn select(self, id: &ClipId) -> bool {
        let Some(record) = self.history.find_by_id(id) else {
            log::debug!("Selection of unknown clip {}", id);
            return false;
        };

        if best_effort("Clipboard write", self.clipboard.write_text(record.text()).await).is_none()
        {
            return false;
        }

        self.watcher.mark_observed(record.text());
        self.surfaces.broadcast_highlight(record.id());
        true
    }
}
