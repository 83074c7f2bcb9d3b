//! Presentation surface adapters

mod requests;
mod stdio;

pub use requests::{forward_requests, parse_request, RequestError};
pub use stdio::{StdioSurface, StdioSurfaceHost};
