//! JSON-lines surface bridge on stdout
//!
//! Every surface operation becomes one line on the shared writer, tagged with
//! the surface and display it targets. A separate presentation process reads
//! the stream and does the actual rendering.

use std::io::{self, Stdout, Write};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use crate::application::ports::{
    Surface, SurfaceError, SurfaceEvent, SurfaceFactory, SurfaceId, SurfaceMessage, SurfaceStyle,
};
use crate::application::CoreEvent;
use crate::domain::display::{Display, DisplayId, Rect};

type SharedWriter<W> = Arc<Mutex<W>>;

#[derive(Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
enum Operation<'a> {
    Create { bounds: Rect, style: SurfaceStyle },
    Show,
    ShowInactive,
    Hide,
    SetContentProtection { enabled: bool },
    Message { message: &'a SurfaceMessage },
    Close,
}

#[derive(Serialize)]
struct Line<'a> {
    surface: SurfaceId,
    display: DisplayId,
    #[serde(flatten)]
    operation: Operation<'a>,
}

fn write_line<W: Write>(
    writer: &SharedWriter<W>,
    surface: SurfaceId,
    display: DisplayId,
    operation: Operation<'_>,
) -> Result<(), SurfaceError> {
    let line = Line {
        surface,
        display,
        operation,
    };
    let json =
        serde_json::to_string(&line).map_err(|e| SurfaceError::SendFailed(e.to_string()))?;

    let mut writer = writer
        .lock()
        .map_err(|e| SurfaceError::SendFailed(e.to_string()))?;
    writeln!(writer, "{}", json)
        .and_then(|_| writer.flush())
        .map_err(|e| SurfaceError::SendFailed(e.to_string()))
}

/// Surface factory writing to stdout (or any shared writer in tests)
pub struct StdioSurfaceHost<W: Write = Stdout> {
    writer: SharedWriter<W>,
    events: UnboundedSender<CoreEvent>,
}

impl StdioSurfaceHost<Stdout> {
    pub fn new(events: UnboundedSender<CoreEvent>) -> Self {
        Self::with_writer(Arc::new(Mutex::new(io::stdout())), events)
    }
}

impl<W: Write> StdioSurfaceHost<W> {
    pub fn with_writer(writer: SharedWriter<W>, events: UnboundedSender<CoreEvent>) -> Self {
        Self { writer, events }
    }
}

impl<W: Write> SurfaceFactory for StdioSurfaceHost<W> {
    type Surface = StdioSurface<W>;

    fn create_surface(
        &mut self,
        id: SurfaceId,
        display: &Display,
        bounds: Rect,
        style: SurfaceStyle,
    ) -> Result<StdioSurface<W>, SurfaceError> {
        write_line(
            &self.writer,
            id,
            display.id,
            Operation::Create { bounds, style },
        )
        .map_err(|e| SurfaceError::CreateFailed(e.to_string()))?;

        // The bridge is line-buffered, so the surface can take state as soon
        // as its create line is out.
        if self
            .events
            .send(CoreEvent::Surface(SurfaceEvent::Ready(id)))
            .is_err()
        {
            log::debug!("Event loop gone before surface {} became ready", id);
        }

        Ok(StdioSurface {
            id,
            display: display.id,
            visible: false,
            closed: false,
            writer: Arc::clone(&self.writer),
        })
    }
}

/// One surface on the stdio bridge
pub struct StdioSurface<W: Write> {
    id: SurfaceId,
    display: DisplayId,
    visible: bool,
    closed: bool,
    writer: SharedWriter<W>,
}

impl<W: Write> StdioSurface<W> {
    fn emit(&self, operation: Operation<'_>) -> Result<(), SurfaceError> {
        if self.closed {
            return Err(SurfaceError::OperationFailed(format!(
                "surface {} is closed",
                self.id
            )));
        }
        write_line(&self.writer, self.id, self.display, operation)
    }
}

impl<W: Write> Surface for StdioSurface<W> {
    fn show(&mut self) -> Result<(), SurfaceError> {
        self.emit(Operation::Show)?;
        self.visible = true;
        Ok(())
    }

    fn show_inactive(&mut self) -> Result<(), SurfaceError> {
        self.emit(Operation::ShowInactive)?;
        self.visible = true;
        Ok(())
    }

    fn hide(&mut self) -> Result<(), SurfaceError> {
        self.emit(Operation::Hide)?;
        self.visible = false;
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.visible && !self.closed
    }

    fn set_content_protection(&mut self, enabled: bool) -> Result<(), SurfaceError> {
        self.emit(Operation::SetContentProtection { enabled })
    }

    fn send(&mut self, message: &SurfaceMessage) -> Result<(), SurfaceError> {
        self.emit(Operation::Message { message })
    }

    fn close(&mut self) -> Result<(), SurfaceError> {
        self.emit(Operation::Close)?;
        self.closed = true;
        self.visible = false;
        Ok(())
    }
}
