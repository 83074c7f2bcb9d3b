//! Clip history domain module

mod history;
mod record;

pub use history::{HistoryStore, MAX_CLIPS, VISIBLE_SLOTS};
pub use record::{ClipId, ClipRecord};
