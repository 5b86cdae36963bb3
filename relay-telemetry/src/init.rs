//! Subscriber installation.

use serde::{Deserialize, Serialize};
use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Default filter directive when neither `RUST_LOG` nor an explicit level is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{directive}': {message}")]
    Filter { directive: String, message: String },

    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Logging settings, usually read from the `[telemetry]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub service_name: String,
    /// An `EnvFilter` directive such as `info` or `relay_pipeline=debug`.
    pub log_level: String,
    /// Emit one JSON object per event instead of human-readable lines.
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "relay".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

/// Initialize console logging with the default level.
///
/// `RUST_LOG` takes precedence when it is set.
pub fn init_telemetry(service_name: &str) -> Result<(), TelemetryError> {
    init_with_config(&TelemetryConfig {
        service_name: service_name.to_string(),
        ..Default::default()
    })
}

/// Initialize logging from explicit settings.
///
/// Only the first call in a process installs a subscriber; later calls return `Ok(())`.
pub fn init_with_config(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let mut outcome = Ok(());
    INIT.call_once(|| outcome = install(config));
    outcome
}

fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let level = config.log_level.trim();
    let directive = if level.is_empty() { DEFAULT_LOG_LEVEL } else { level };
    EnvFilter::try_new(directive).map_err(|e| TelemetryError::Filter {
        directive: directive.to_string(),
        message: e.to_string(),
    })
}

fn install(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;

    let json_layer = config.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(true)
    });
    let text_layer = (!config.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| TelemetryError::Install(e.to_string()))?;

    tracing::info!(
        service.name = %config.service_name,
        json = config.json,
        "telemetry initialized"
    );
    Ok(())
}
