//! Main app runner: wires adapters into the engine and drives the event loop

use std::process::ExitCode;

use tokio::io::BufReader;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::application::ports::ConfigStore;
use crate::application::{ClipboardEngine, CoreEvent, EngineSettings};
use crate::domain::config::{AppConfig, MAX_HISTORY_LIMIT};
use crate::domain::display::Display;
use crate::domain::hotkey::Accelerator;
use crate::domain::interval::PollInterval;
use crate::infrastructure::{
    create_clipboard, create_registry, forward_requests, ConfiguredDisplays, StdioSurfaceHost,
    XdgConfigStore,
};

use super::args::RunOptions;
use super::presenter::Presenter;
use super::signals::spawn_shutdown_listener;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the clipboard service until a shutdown signal arrives
pub async fn run(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Surface requests, host notifications and signals share one channel;
    // accelerator presses come from the hotkey thread on their own.
    let (bridge_tx, mut bridge_rx) = mpsc::unbounded_channel::<CoreEvent>();
    let (accel_tx, mut accel_rx) = mpsc::unbounded_channel::<Accelerator>();

    if let Err(e) = spawn_shutdown_listener(bridge_tx.clone()) {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let displays = ConfiguredDisplays::new(options.displays.clone());
    let clipboard = create_clipboard(&options.clipboard_backend);
    let registry = create_registry(options.hotkeys, accel_tx);
    let host = StdioSurfaceHost::new(bridge_tx.clone());

    tokio::spawn(forward_requests(
        BufReader::new(tokio::io::stdin()),
        displays.clone(),
        bridge_tx,
    ));

    let settings = EngineSettings {
        history_limit: options.history_limit,
        show_on_copy: options.show_on_copy,
        content_protection: options.content_protection,
    };
    let mut engine = ClipboardEngine::new(clipboard, registry, host, displays, settings);
    engine.start(&options.toggle_candidates).await;

    let toggle_hint = engine.toggle_accelerator().map(Accelerator::hint);
    presenter.status(&presenter.format_ready(engine.surfaces().len(), toggle_hint.as_deref()));

    let mut ticker = interval(options.poll_interval.as_std());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick fires immediately; start() already read the clipboard.
    ticker.tick().await;

    loop {
        let event = tokio::select! {
            _ = ticker.tick() => CoreEvent::Tick,
            Some(accelerator) = accel_rx.recv() => CoreEvent::Accelerator(accelerator),
            Some(event) = bridge_rx.recv() => event,
        };

        if engine.handle(event).await.is_break() {
            break;
        }
    }

    presenter.success("Stopped");
    ExitCode::from(EXIT_SUCCESS)
}

/// Load and merge configuration from file and CLI.
///
/// Environment overrides are resolved by clap into `cli_config`, so the
/// effective order is defaults < file < env < cli.
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load_or_empty().await;

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Turn a merged config into run options, rejecting values that are set
/// but malformed.
pub fn resolve_options(config: &AppConfig) -> Result<RunOptions, String> {
    let poll_interval = match config.poll_interval.as_deref() {
        Some(s) => s
            .parse::<PollInterval>()
            .map_err(|e| format!("Invalid poll interval: {}", e))?,
        None => PollInterval::default(),
    };

    if let Some(limit) = config.history_limit {
        if !(1..=MAX_HISTORY_LIMIT).contains(&limit) {
            return Err(format!(
                "Invalid history limit: {} (expected 1 to {})",
                limit, MAX_HISTORY_LIMIT
            ));
        }
    }

    for display in config.displays.iter().flatten() {
        Display::try_from(*display).map_err(|e| e.to_string())?;
    }

    if let Some(candidates) = &config.toggle_candidates {
        for candidate in candidates {
            candidate
                .parse::<Accelerator>()
                .map_err(|e| format!("Invalid toggle accelerator: {}", e))?;
        }
    }

    Ok(RunOptions {
        poll_interval,
        history_limit: config.history_limit_or_default(),
        toggle_candidates: config.toggle_candidates_or_default(),
        content_protection: config.content_protection_or_default(),
        show_on_copy: config.show_on_copy_or_default(),
        hotkeys: config.hotkeys_or_default(),
        clipboard_backend: config.clipboard_backend_or_default().to_string(),
        displays: config.displays_or_default(),
    })
}
