//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("wl-copy not found. Please install wl-clipboard.")]
    WlCopyNotFound,

    #[error("wl-paste not found. Please install wl-clipboard.")]
    WlPasteNotFound,

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(String),
}

/// Port for the system clipboard (plain text only)
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read the current clipboard text.
    ///
    /// # Returns
    /// The text, or an empty string when the clipboard holds no text
    async fn read_text(&self) -> Result<String, ClipboardError>;

    /// Replace the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        self.as_ref().read_text().await
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write_text(text).await
    }
}
