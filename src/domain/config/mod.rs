//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, DisplayConfig, LinuxConfig, DEFAULT_CLIPBOARD_BACKEND, MAX_HISTORY_LIMIT,
};
