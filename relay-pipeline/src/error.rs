//! Error types for the relay pipeline.

use crate::config::ValidationError;
use relay_core::RelayError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Every way a relay run can end early. Each one is terminal.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Configuration validation error: {0}")]
    ConfigValidation(#[from] ValidationError),

    #[error("AWS credentials not found (searched: {})", display_paths(.searched))]
    MissingCredentials { searched: Vec<PathBuf> },

    #[error("Connectivity check failed in region {region}: {message}")]
    Connectivity { region: String, message: String },

    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },

    #[error(transparent)]
    Model(#[from] RelayError),
}

impl PipelineError {
    pub fn config(msg: impl Into<String>) -> Self {
        PipelineError::Configuration(msg.into())
    }

    pub fn stage(stage: impl Into<String>, msg: impl Into<String>) -> Self {
        PipelineError::StageFailed { stage: stage.into(), message: msg.into() }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the failure happened before any stage ran.
    pub fn is_startup(&self) -> bool {
        !matches!(self, PipelineError::StageFailed { .. })
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "process environment only".to_string();
    }
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}
