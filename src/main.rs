//! ClipArt CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clipart::cli::{
    app::{load_merged_config, resolve_options, run, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{log_filter, Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use clipart::domain::config::{AppConfig, LinuxConfig};
use clipart::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(cli.verbose)))
        .format_timestamp_millis()
        .init();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        poll_interval: cli.poll_interval.clone(),
        history_limit: None, // file only
        toggle_candidates: (!cli.toggle.is_empty()).then(|| cli.toggle.clone()),
        content_protection: cli.content_protection.then_some(true),
        show_on_copy: cli.no_show_on_copy.then_some(false),
        hotkeys: cli.no_hotkeys.then_some(false),
        linux: cli.clipboard_backend.map(|backend| LinuxConfig {
            clipboard_backend: Some(backend.as_str().to_string()),
        }),
        displays: None,
    };

    let config = load_merged_config(cli_config).await;

    let options = match resolve_options(&config) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run(options).await
}
