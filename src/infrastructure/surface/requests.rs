//! JSON-lines requests from the presentation process
//!
//! One request per line on stdin:
//!
//! ```text
//! {"type":"select","id":"<clip id>"}
//! {"type":"set-content-protection","enabled":true}
//! {"type":"ready","surface":1}
//! {"type":"close","surface":1}
//! {"type":"display-added","id":2,"x":1920,"y":0,"width":1920,"height":1040}
//! {"type":"display-removed","id":2}
//! {"type":"activate"}
//! ```

use serde::Deserialize;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedSender;

use crate::application::ports::{DisplayChange, SurfaceEvent, SurfaceId};
use crate::application::CoreEvent;
use crate::domain::clip::ClipId;
use crate::domain::config::DisplayConfig;
use crate::domain::display::{Display, DisplayId};
use crate::domain::error::DisplayConfigError;
use crate::infrastructure::display::ConfiguredDisplays;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum Request {
    Select { id: ClipId },
    SetContentProtection { enabled: bool },
    Ready { surface: SurfaceId },
    Close { surface: SurfaceId },
    DisplayAdded(DisplayConfig),
    DisplayRemoved { id: u32 },
    Activate,
}

/// Why a request line was not turned into an event
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Malformed request: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidDisplay(#[from] DisplayConfigError),
}

impl TryFrom<Request> for CoreEvent {
    type Error = DisplayConfigError;

    fn try_from(request: Request) -> Result<Self, Self::Error> {
        let event = match request {
            Request::Select { id } => CoreEvent::Surface(SurfaceEvent::Select(id)),
            Request::SetContentProtection { enabled } => {
                CoreEvent::Surface(SurfaceEvent::SetContentProtection(enabled))
            }
            Request::Ready { surface } => CoreEvent::Surface(SurfaceEvent::Ready(surface)),
            Request::Close { surface } => CoreEvent::Surface(SurfaceEvent::Closed(surface)),
            Request::DisplayAdded(display) => {
                CoreEvent::Topology(DisplayChange::Added(Display::try_from(display)?))
            }
            Request::DisplayRemoved { id } => {
                CoreEvent::Topology(DisplayChange::Removed(DisplayId(id)))
            }
            Request::Activate => CoreEvent::Activate,
        };
        Ok(event)
    }
}

/// Parse one request line into the event it stands for
pub fn parse_request(line: &str) -> Result<CoreEvent, RequestError> {
    let request: Request = serde_json::from_str(line)?;
    Ok(CoreEvent::try_from(request)?)
}

/// Read requests until EOF, forwarding each as a [`CoreEvent`].
///
/// Topology requests are applied to `displays` before they are forwarded so
/// the engine's next enumeration already reflects them. Malformed lines are
/// logged and skipped, as are displays with an unusable work area.
pub async fn forward_requests<R>(
    reader: R,
    displays: ConfiguredDisplays,
    events: UnboundedSender<CoreEvent>,
) where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                log::info!("Presentation input closed");
                return;
            }
            Err(e) => {
                log::warn!("Failed to read presentation input: {}", e);
                return;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let event = match parse_request(&line) {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Ignoring request {:?}: {}", line, e);
                continue;
            }
        };

        if let CoreEvent::Topology(change) = &event {
            displays.apply(*change);
        }

        if events.send(event).is_err() {
            return;
        }
    }
}
