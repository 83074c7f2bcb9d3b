//! Clipboard change detection
//!
//! The OS clipboard has no portable change notification, so the watcher
//! compares each poll against the last text it observed. Text the engine
//! writes itself is marked observed so it never loops back into history.

use crate::domain::clip::{ClipRecord, HistoryStore};

use super::best_effort::best_effort_quiet;
use super::ports::Clipboard;

#[derive(Debug, Default)]
pub struct ClipboardWatcher {
    last_observed: String,
}

impl ClipboardWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whatever the clipboard holds at startup as the first clip.
    pub async fn seed<C: Clipboard>(
        &mut self,
        clipboard: &C,
        history: &mut HistoryStore,
    ) -> Option<ClipRecord> {
        self.poll(clipboard, history).await
    }

    /// Read the clipboard once; append the text if it changed.
    ///
    /// Returns the new record when history actually grew. Read failures and
    /// empty clipboards are no-ops.
    pub async fn poll<C: Clipboard>(
        &mut self,
        clipboard: &C,
        history: &mut HistoryStore,
    ) -> Option<ClipRecord> {
        let text = best_effort_quiet("Clipboard read", clipboard.read_text().await)?;
        if text.is_empty() || text == self.last_observed {
            return None;
        }

        let record = history.append(&text);
        self.last_observed = text;
        if let Some(record) = &record {
            log::debug!("Captured clip {} ({} chars)", record.id(), record.text().len());
        }
        record
    }

    /// Treat `text` as already seen, typically after writing it ourselves.
    pub fn mark_observed(&mut self, text: &str) {
        self.last_observed = text.to_string();
    }

    pub fn last_observed(&self) -> &str {
        &self.last_observed
    }
}
