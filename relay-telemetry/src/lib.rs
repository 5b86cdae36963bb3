//! # relay-telemetry
//!
//! Structured logging for the relay call chain, built on `tracing`.
//!
//! Logs always go to stderr so they never interleave with the pipeline
//! report printed on stdout.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use relay_telemetry::{TelemetryConfig, init_with_config, info};
//!
//! init_with_config(&TelemetryConfig::default())?;
//! info!("pipeline starting");
//! ```

pub mod events;
pub mod init;
pub mod spans;

pub use tracing::{Span, debug, error, info, instrument, trace, warn};

pub use events::*;
pub use init::{TelemetryConfig, TelemetryError, init_telemetry, init_with_config};
pub use spans::*;
