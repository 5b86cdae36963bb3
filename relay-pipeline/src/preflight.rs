//! Connectivity check run before the pipeline.

use crate::agent::{AgentConfig, InferenceAgent};
use crate::config::PreflightConfig;
use crate::error::{PipelineError, Result};
use crate::output::PipelineOutput;
use relay_core::Llm;
use relay_telemetry::preflight_span;
use std::sync::Arc;
use tracing::{Instrument, warn};

/// Characters of the reply echoed to the console.
pub const PREVIEW_CHARS: usize = 50;

/// Send the preflight prompt once and return the full cleaned reply.
pub async fn check_connectivity(
    llm: Arc<dyn Llm>,
    config: &PreflightConfig,
    region: &str,
    output: &PipelineOutput,
) -> Result<String> {
    output.preflight_start(&config.model_id);

    let agent = InferenceAgent::new(llm, AgentConfig::new(config.model_id.as_str()), None);
    let span = preflight_span(&config.model_id);

    match agent.run(&config.prompt).instrument(span).await {
        Ok(reply) => {
            output.preflight_ok(&preview(&reply));
            Ok(reply)
        }
        Err(err) => {
            let message = err.to_string();
            warn!(
                region = %region,
                model = %config.model_id,
                error = %message,
                "connectivity check failed"
            );
            output.preflight_failed(region, &message);
            Err(PipelineError::Connectivity { region: region.to_string(), message })
        }
    }
}

/// First [`PREVIEW_CHARS`] characters of `text`.
pub fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
