//! ClipArt - clipboard history with per-display panels
//!
//! This crate watches the system clipboard, keeps a bounded newest-first
//! history of copied text, shows it on a floating panel on every display,
//! and puts entries back on the clipboard from a click or a global hotkey.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Clip records, the history store, accelerators, display geometry, config
//! - **Application**: The clipboard engine, its components, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, wl-clipboard, global-hotkey, stdio bridge)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
