//! # relay-pipeline
//!
//! A fixed four-stage LLM call chain: architecture, code, tests and
//! documentation. Each stage's output feeds the next prompt, the first
//! failure stops the chain, and every stage is timed.
//!
//! ## Components
//!
//! - [`InferenceAgent`] - one system + user request, reply cleaned to ASCII
//! - [`StageRunner`] - runs and times a single stage
//! - [`Pipeline`] - drives the stages and prints the report
//! - [`RelayConfig`] - models, prompts, timeouts and logging, built once at startup
//! - [`Environment`] - read-only env-file and process-environment lookup
//!
//! Any [`relay_core::Llm`] can back the pipeline; the `relay` binary uses
//! Amazon Bedrock and tests use [`relay_model::MockLlm`].

pub mod agent;
pub mod config;
pub mod environment;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod preflight;
pub mod stage;

pub use agent::{AgentConfig, InferenceAgent};
pub use config::{
    PreflightConfig, RelayConfig, StageConfig, StageKind, StagesConfig, TelemetryConfig,
    TransportConfig, ValidationError,
};
pub use environment::{AwsSettings, EnvFile, Environment};
pub use error::{PipelineError, Result};
pub use orchestrator::{Pipeline, PipelinePhase, PipelineReport, PipelineState};
pub use output::{OutputCapture, PipelineOutput};
pub use preflight::check_connectivity;
pub use stage::{StageRunner, StageTiming, TimingLog};
