//! Pipeline controller.
//!
//! Drives the four stages in fixed order and threads each stage's output into
//! the next prompt:
//!
//! ```text
//! Architecture -> Development -> Testing -> Documentation -> Done
//!       \______________\______________\____________\______-> Failed
//! ```
//!
//! The first failing stage moves the pipeline to `Failed`; nothing after it runs.

use crate::agent::{AgentConfig, InferenceAgent};
use crate::config::{
    PLACEHOLDER_ARCHITECTURE, PLACEHOLDER_CODE, PLACEHOLDER_REQUEST, PLACEHOLDER_TESTS,
    RelayConfig, StageKind,
};
use crate::error::{PipelineError, Result};
use crate::output::PipelineOutput;
use crate::stage::{StageRunner, TimingLog};
use relay_core::{Llm, render_template};
use relay_telemetry::{log_error, log_pipeline_complete};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Pipeline phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelinePhase {
    Architecture,
    Development,
    Testing,
    Documentation,
    Done,
    Failed,
}

impl PipelinePhase {
    /// Phase entered when the current stage succeeds. `Done` and `Failed` are absorbing.
    pub fn next(self) -> Self {
        match self {
            PipelinePhase::Architecture => PipelinePhase::Development,
            PipelinePhase::Development => PipelinePhase::Testing,
            PipelinePhase::Testing => PipelinePhase::Documentation,
            PipelinePhase::Documentation => PipelinePhase::Done,
            PipelinePhase::Done => PipelinePhase::Done,
            PipelinePhase::Failed => PipelinePhase::Failed,
        }
    }

    /// The stage executed in this phase, if any.
    pub fn stage(self) -> Option<StageKind> {
        match self {
            PipelinePhase::Architecture => Some(StageKind::Architecture),
            PipelinePhase::Development => Some(StageKind::Development),
            PipelinePhase::Testing => Some(StageKind::Testing),
            PipelinePhase::Documentation => Some(StageKind::Documentation),
            PipelinePhase::Done | PipelinePhase::Failed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.stage().is_none()
    }
}

impl From<StageKind> for PipelinePhase {
    fn from(kind: StageKind) -> Self {
        match kind {
            StageKind::Architecture => PipelinePhase::Architecture,
            StageKind::Development => PipelinePhase::Development,
            StageKind::Testing => PipelinePhase::Testing,
            StageKind::Documentation => PipelinePhase::Documentation,
        }
    }
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelinePhase::Architecture => write!(f, "Architecture"),
            PipelinePhase::Development => write!(f, "Development"),
            PipelinePhase::Testing => write!(f, "Testing"),
            PipelinePhase::Documentation => write!(f, "Documentation"),
            PipelinePhase::Done => write!(f, "Done"),
            PipelinePhase::Failed => write!(f, "Failed"),
        }
    }
}

/// Outputs of completed stages plus their timings.
#[derive(Debug, Clone)]
pub struct PipelineState {
    pub phase: PipelinePhase,
    pub architecture: Option<String>,
    pub code: Option<String>,
    pub tests: Option<String>,
    pub documentation: Option<String>,
    pub timings: TimingLog,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            phase: PipelinePhase::Architecture,
            architecture: None,
            code: None,
            tests: None,
            documentation: None,
            timings: TimingLog::default(),
        }
    }
}

impl PipelineState {
    pub fn output(&self, kind: StageKind) -> Option<&str> {
        match kind {
            StageKind::Architecture => self.architecture.as_deref(),
            StageKind::Development => self.code.as_deref(),
            StageKind::Testing => self.tests.as_deref(),
            StageKind::Documentation => self.documentation.as_deref(),
        }
    }

    fn set_output(&mut self, kind: StageKind, text: String) {
        let slot = match kind {
            StageKind::Architecture => &mut self.architecture,
            StageKind::Development => &mut self.code,
            StageKind::Testing => &mut self.tests,
            StageKind::Documentation => &mut self.documentation,
        };
        *slot = Some(text);
    }
}

/// Result of a fully completed run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub architecture: String,
    pub code: String,
    pub tests: String,
    pub documentation: String,
    pub timings: TimingLog,
    /// Wall-clock time from pipeline start to the end of the last stage.
    pub total: Duration,
}

/// The four-stage controller.
///
/// # Example
///
/// ```rust,ignore
/// use relay_pipeline::{Pipeline, PipelineOutput, RelayConfig};
///
/// let output = PipelineOutput::console();
/// let mut pipeline = Pipeline::new(RelayConfig::default(), llm, output, "us-east-1");
/// let report = pipeline.run().await?;
/// println!("{}", report.documentation);
/// ```
pub struct Pipeline {
    config: RelayConfig,
    llm: Arc<dyn Llm>,
    output: PipelineOutput,
    region: String,
    state: PipelineState,
}

impl Pipeline {
    pub fn new(
        config: RelayConfig,
        llm: Arc<dyn Llm>,
        output: PipelineOutput,
        region: impl Into<String>,
    ) -> Self {
        Self { config, llm, output, region: region.into(), state: PipelineState::default() }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn phase(&self) -> PipelinePhase {
        self.state.phase
    }

    /// Prompt for `kind`, rendered from its template and the outputs so far.
    pub fn prompt_for(&self, kind: StageKind) -> String {
        let state = &self.state;
        let values = [
            (PLACEHOLDER_REQUEST, Some(self.config.project_request.as_str())),
            (PLACEHOLDER_ARCHITECTURE, state.architecture.as_deref()),
            (PLACEHOLDER_CODE, state.code.as_deref()),
            (PLACEHOLDER_TESTS, state.tests.as_deref()),
        ];
        let available = kind.available_placeholders();
        let vars: Vec<(&str, &str)> = values
            .iter()
            .filter(|(name, _)| available.contains(name))
            .filter_map(|(name, value)| value.map(|v| (*name, v)))
            .collect();

        render_template(&self.config.stages.get(kind).prompt_template, &vars)
    }

    fn agent_for(&self, kind: StageKind) -> InferenceAgent {
        let stage = self.config.stages.get(kind);
        let generation = Some(stage.generation_config());
        InferenceAgent::new(self.llm.clone(), AgentConfig::from(stage), generation)
    }

    /// Run all four stages. Can only be called once per pipeline.
    #[instrument(skip(self), fields(region = %self.region))]
    pub async fn run(&mut self) -> Result<PipelineReport> {
        if self.state.phase != PipelinePhase::Architecture || !self.state.timings.is_empty() {
            let phase = self.state.phase;
            return Err(PipelineError::config(format!("pipeline already ran (phase: {phase})")));
        }
        self.config.validate()?;

        let runner = StageRunner::new(self.output.clone(), self.region.clone());
        let started = Instant::now();
        info!(request = %self.config.project_request, "pipeline starting");

        while let Some(kind) = self.state.phase.stage() {
            let prompt = self.prompt_for(kind);
            let agent = self.agent_for(kind);
            let label = self.config.stages.get(kind).label.clone();

            match runner.run(kind, &label, &agent, &prompt, &mut self.state.timings).await {
                Ok(text) => {
                    self.state.set_output(kind, text);
                    self.state.phase = self.state.phase.next();
                }
                Err(err) => {
                    self.state.phase = PipelinePhase::Failed;
                    let total = started.elapsed();
                    log_error(&format!("stage {kind}"), &err.to_string());
                    self.output.pipeline_failed(&err.to_string(), total);
                    self.output.timing_summary(&self.state.timings, total);
                    return Err(err);
                }
            }
        }

        let total = started.elapsed();
        let labels = self.config.stages.iter().map(|(_, stage)| stage.label.as_str());
        self.output.completion_banner(labels);
        self.output.timing_summary(&self.state.timings, total);
        log_pipeline_complete(self.state.timings.len(), total.as_millis() as u64);

        let state = &self.state;
        let take = |kind: StageKind| state.output(kind).unwrap_or_default().to_string();
        Ok(PipelineReport {
            architecture: take(StageKind::Architecture),
            code: take(StageKind::Development),
            tests: take(StageKind::Testing),
            documentation: take(StageKind::Documentation),
            timings: state.timings.clone(),
            total,
        })
    }
}
