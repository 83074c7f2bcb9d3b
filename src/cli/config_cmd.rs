//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, LinuxConfig, MAX_HISTORY_LIMIT};
use crate::domain::error::ConfigError;
use crate::domain::hotkey::Accelerator;
use crate::domain::interval::PollInterval;

use super::args::{is_valid_config_key, ConfigAction, VALID_CLIPBOARD_BACKENDS, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    match read_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = read_value(&config, key);
        presenter.key_value(key, value.as_deref().unwrap_or(NOT_SET));
    }

    if let Some(displays) = &config.displays {
        presenter.key_value("displays", &format!("{} configured", displays.len()));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.into(),
    }
}

/// Validate `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "poll_interval" => {
            let interval = value
                .parse::<PollInterval>()
                .map_err(|e| invalid(key, e.to_string()))?;
            config.poll_interval = Some(interval.to_string());
        }
        "history_limit" => {
            let limit = value
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=MAX_HISTORY_LIMIT).contains(n))
                .ok_or_else(|| {
                    invalid(
                        key,
                        format!("Value must be a number from 1 to {}", MAX_HISTORY_LIMIT),
                    )
                })?;
            config.history_limit = Some(limit);
        }
        "toggle_candidates" => {
            let candidates = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse::<Accelerator>()
                        .map(|a| a.to_string())
                        .map_err(|e| invalid(key, e.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            if candidates.is_empty() {
                return Err(invalid(key, "At least one accelerator is required"));
            }
            config.toggle_candidates = Some(candidates);
        }
        "content_protection" => config.content_protection = Some(parse_bool_for(key, value)?),
        "show_on_copy" => config.show_on_copy = Some(parse_bool_for(key, value)?),
        "hotkeys" => config.hotkeys = Some(parse_bool_for(key, value)?),
        "linux.clipboard_backend" => {
            let lower = value.to_lowercase();
            if !VALID_CLIPBOARD_BACKENDS.contains(&lower.as_str()) {
                return Err(invalid(
                    key,
                    format!(
                        "Invalid value '{}'. Valid options: {}",
                        value,
                        VALID_CLIPBOARD_BACKENDS.join(", ")
                    ),
                ));
            }
            config
                .linux
                .get_or_insert_with(LinuxConfig::default)
                .clipboard_backend = Some(lower);
        }
        _ => return Err(invalid(key, "Unknown key")),
    }
    Ok(())
}

fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "poll_interval" => config.poll_interval.clone(),
        "history_limit" => config.history_limit.map(|n| n.to_string()),
        "toggle_candidates" => config.toggle_candidates.as_ref().map(|c| c.join(",")),
        "content_protection" => config.content_protection.map(|b| b.to_string()),
        "show_on_copy" => config.show_on_copy.map(|b| b.to_string()),
        "hotkeys" => config.hotkeys.map(|b| b.to_string()),
        "linux.clipboard_backend" => config
            .linux
            .as_ref()
            .and_then(|l| l.clipboard_backend.clone()),
        _ => None,
    }
}

fn parse_bool_for(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| invalid(key, "Value must be 'true' or 'false'"))
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}
