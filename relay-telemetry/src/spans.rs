//! Span helpers for pipeline operations.

use tracing::{Span, info_span};

/// Span covering one pipeline stage, from prompt to timing entry.
pub fn stage_run_span(stage: &str, model: &str) -> Span {
    info_span!("relay.stage_run", otel.name = "Stage Run", stage = %stage, model = %model)
}

/// Span for a single model request.
pub fn model_call_span(model: &str) -> Span {
    info_span!("relay.model_call", otel.name = "Model Call", model = %model, otel.kind = "client")
}

pub fn preflight_span(model: &str) -> Span {
    info_span!("relay.preflight", otel.name = "Preflight", model = %model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_creation() {
        let _stage = stage_run_span("Architecture", "anthropic.claude-3-sonnet-20240229-v1:0");
        let _call = model_call_span("amazon.nova-lite-v1:0");
        let span = preflight_span("amazon.titan-text-express-v1");
        let _entered = span.enter();
    }
}
