//! Stage execution and timing records.

use crate::agent::InferenceAgent;
use crate::config::StageKind;
use crate::error::{PipelineError, Result};
use crate::output::PipelineOutput;
use relay_telemetry::{log_stage_complete, log_stage_start, stage_run_span};
use std::time::{Duration, Instant};
use tracing::Instrument;

/// Outcome of one stage execution. Never changed once recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct StageTiming {
    name: String,
    duration: Duration,
    success: bool,
}

impl StageTiming {
    pub(crate) fn new(name: impl Into<String>, duration: Duration, success: bool) -> Self {
        Self { name: name.into(), duration, success }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn success(&self) -> bool {
        self.success
    }
}

/// Append-only list of stage timings, in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingLog {
    entries: Vec<StageTiming>,
}

impl TimingLog {
    pub(crate) fn push(&mut self, timing: StageTiming) {
        self.entries.push(timing);
    }

    pub fn entries(&self) -> &[StageTiming] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all recorded durations.
    pub fn sum(&self) -> Duration {
        self.entries.iter().map(StageTiming::duration).sum()
    }
}

/// Runs a stage, times it and reports the outcome.
#[derive(Debug, Clone)]
pub struct StageRunner {
    output: PipelineOutput,
    region: String,
}

impl StageRunner {
    /// `region` is only used in failure hints.
    pub fn new(output: PipelineOutput, region: impl Into<String>) -> Self {
        Self { output, region: region.into() }
    }

    /// Call `agent` with `prompt` and append exactly one entry to `timings`.
    pub async fn run(
        &self,
        kind: StageKind,
        label: &str,
        agent: &InferenceAgent,
        prompt: &str,
        timings: &mut TimingLog,
    ) -> Result<String> {
        self.output.stage_start(kind, label);
        log_stage_start(label, agent.model_id());

        let span = stage_run_span(label, agent.model_id());
        let started = Instant::now();
        let outcome = agent.run(prompt).instrument(span).await;
        let elapsed = started.elapsed();

        timings.push(StageTiming::new(label, elapsed, outcome.is_ok()));
        log_stage_complete(label, outcome.is_ok(), elapsed.as_millis() as u64);

        match outcome {
            Ok(text) => {
                self.output.stage_output(kind, &text);
                self.output.stage_success(kind, elapsed);
                Ok(text)
            }
            Err(err) => {
                let message = err.to_string();
                let model = agent.model_id();
                self.output.stage_failure(kind, label, elapsed, &message, model, &self.region);
                Err(PipelineError::stage(label, message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentConfig;
    use relay_model::MockLlm;
    use std::sync::Arc;

    fn agent(mock: MockLlm) -> InferenceAgent {
        InferenceAgent::new(Arc::new(mock), AgentConfig::new("amazon.nova-lite-v1:0"), None)
    }

    #[test]
    fn test_timing_log_sum() {
        let mut log = TimingLog::default();
        assert!(log.is_empty());
        log.push(StageTiming::new("a", Duration::from_millis(300), true));
        log.push(StageTiming::new("b", Duration::from_millis(200), false));
        assert_eq!(log.len(), 2);
        assert_eq!(log.sum(), Duration::from_millis(500));
        assert!(!log.entries()[1].success());
    }

    #[tokio::test]
    async fn test_success_records_one_entry() {
        let (output, capture) = PipelineOutput::buffered();
        let runner = StageRunner::new(output, "us-east-1");
        let mut timings = TimingLog::default();

        let agent = agent(MockLlm::new("m").with_text("tests"));
        let text = runner
            .run(StageKind::Testing, "Testing (Nova Lite)", &agent, "go", &mut timings)
            .await
            .unwrap();

        assert_eq!(text, "tests");
        assert_eq!(timings.len(), 1);
        assert_eq!(timings.entries()[0].name(), "Testing (Nova Lite)");
        assert!(timings.entries()[0].success());
        let out = capture.stdout();
        assert!(out.contains("=== TESTS ===\ntests\n"));
        assert!(out.contains("Stage 3 completed successfully"));
    }

    #[tokio::test]
    async fn test_failure_records_entry_and_returns_stage_error() {
        let (output, capture) = PipelineOutput::buffered();
        let runner = StageRunner::new(output, "us-west-2");
        let mut timings = TimingLog::default();

        let agent = agent(MockLlm::new("m").with_error("denied"));
        let err = runner
            .run(StageKind::Testing, "Testing (Nova Lite)", &agent, "go", &mut timings)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::StageFailed { ref stage, .. } if stage == "Testing (Nova Lite)"
        ));
        assert_eq!(timings.len(), 1);
        assert!(!timings.entries()[0].success());
        let stderr = capture.stderr();
        assert!(stderr.contains("amazon.nova-lite-v1:0 not available in region us-west-2"));
    }
}
