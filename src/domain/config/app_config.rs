//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::clip::MAX_CLIPS;
use crate::domain::display::{Display, DisplayId, Rect};
use crate::domain::error::DisplayConfigError;
use crate::domain::hotkey::{default_toggle_candidates, Accelerator, DEFAULT_TOGGLE_CANDIDATES};
use crate::domain::interval::PollInterval;

/// Largest accepted `history_limit`
pub const MAX_HISTORY_LIMIT: usize = 500;

/// Clipboard backend used when none is configured
pub const DEFAULT_CLIPBOARD_BACKEND: &str = "arboard";

/// Linux-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinuxConfig {
    pub clipboard_backend: Option<String>,
}

/// One entry of the `[[displays]]` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl TryFrom<DisplayConfig> for Display {
    type Error = DisplayConfigError;

    /// Accepts only a non-empty work area whose far edges fit in `i32`
    fn try_from(c: DisplayConfig) -> Result<Self, Self::Error> {
        let invalid = |reason: &str| DisplayConfigError {
            id: c.id,
            reason: reason.to_string(),
        };

        if c.width <= 0 || c.height <= 0 {
            return Err(invalid("width and height must be positive"));
        }
        if c.x.checked_add(c.width).is_none() || c.y.checked_add(c.height).is_none() {
            return Err(invalid("work area extends past the coordinate range"));
        }

        Ok(Display::new(
            DisplayId(c.id),
            Rect::new(c.x, c.y, c.width, c.height),
        ))
    }
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub poll_interval: Option<String>,
    pub history_limit: Option<usize>,
    pub toggle_candidates: Option<Vec<String>>,
    pub content_protection: Option<bool>,
    pub show_on_copy: Option<bool>,
    pub hotkeys: Option<bool>,
    pub linux: Option<LinuxConfig>,
    pub displays: Option<Vec<DisplayConfig>>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            poll_interval: Some(PollInterval::default().to_string()),
            history_limit: Some(MAX_CLIPS),
            toggle_candidates: Some(
                DEFAULT_TOGGLE_CANDIDATES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            content_protection: Some(false),
            show_on_copy: Some(true),
            hotkeys: Some(true),
            linux: Some(LinuxConfig {
                clipboard_backend: Some(DEFAULT_CLIPBOARD_BACKEND.to_string()),
            }),
            displays: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            poll_interval: other.poll_interval.or(self.poll_interval),
            history_limit: other.history_limit.or(self.history_limit),
            toggle_candidates: other.toggle_candidates.or(self.toggle_candidates),
            content_protection: other.content_protection.or(self.content_protection),
            show_on_copy: other.show_on_copy.or(self.show_on_copy),
            hotkeys: other.hotkeys.or(self.hotkeys),
            linux: Self::merge_linux_config(self.linux, other.linux),
            displays: other.displays.or(self.displays),
        }
    }

    /// Merge Linux config sections
    fn merge_linux_config(
        base: Option<LinuxConfig>,
        other: Option<LinuxConfig>,
    ) -> Option<LinuxConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(LinuxConfig {
                clipboard_backend: o.clipboard_backend.or(b.clipboard_backend),
            }),
        }
    }

    /// Get history limit, or MAX_CLIPS if not set
    pub fn history_limit_or_default(&self) -> usize {
        self.history_limit.unwrap_or(MAX_CLIPS)
    }

    /// Get parsed toggle candidates in order, skipping invalid entries.
    /// Falls back to the built-in list when nothing usable is configured.
    pub fn toggle_candidates_or_default(&self) -> Vec<Accelerator> {
        let parsed: Vec<Accelerator> = self
            .toggle_candidates
            .iter()
            .flatten()
            .filter_map(|s| s.parse().ok())
            .collect();

        if parsed.is_empty() {
            default_toggle_candidates()
        } else {
            parsed
        }
    }

    /// Get content protection setting, or false if not set
    pub fn content_protection_or_default(&self) -> bool {
        self.content_protection.unwrap_or(false)
    }

    /// Get show-on-copy setting, or true if not set
    pub fn show_on_copy_or_default(&self) -> bool {
        self.show_on_copy.unwrap_or(true)
    }

    /// Get global hotkey setting, or true if not set
    pub fn hotkeys_or_default(&self) -> bool {
        self.hotkeys.unwrap_or(true)
    }

    /// Get clipboard backend preference, or "arboard" if not set
    pub fn clipboard_backend_or_default(&self) -> &str {
        self.linux
            .as_ref()
            .and_then(|l| l.clipboard_backend.as_deref())
            .unwrap_or(DEFAULT_CLIPBOARD_BACKEND)
    }

    /// Get the valid configured displays, or a single 1920x1040 work area
    /// if none are set
    pub fn displays_or_default(&self) -> Vec<Display> {
        let displays: Vec<Display> = self
            .displays
            .iter()
            .flatten()
            .filter_map(|c| Display::try_from(*c).ok())
            .collect();

        if displays.is_empty() {
            vec![Display::new(DisplayId(1), Rect::new(0, 0, 1920, 1040))]
        } else {
            displays
        }
    }
}
