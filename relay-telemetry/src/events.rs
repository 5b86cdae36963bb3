//! Structured pipeline events, all emitted under the `relay.events` target.

/// Log that a stage has started.
pub fn log_stage_start(stage: &str, model: &str) {
    tracing::info!(
        target: "relay.events",
        event = "stage_start",
        stage = %stage,
        model = %model,
        "Starting stage"
    );
}

/// Log a stage outcome with its duration.
pub fn log_stage_complete(stage: &str, success: bool, duration_ms: u64) {
    if success {
        tracing::info!(
            target: "relay.events",
            event = "stage_complete",
            stage = %stage,
            duration_ms = %duration_ms,
            "Stage completed"
        );
    } else {
        tracing::warn!(
            target: "relay.events",
            event = "stage_failed",
            stage = %stage,
            duration_ms = %duration_ms,
            "Stage failed"
        );
    }
}

pub fn log_pipeline_complete(stages: usize, total_ms: u64) {
    tracing::info!(
        target: "relay.events",
        event = "pipeline_complete",
        stages = %stages,
        total_ms = %total_ms,
        "Pipeline completed"
    );
}

pub fn log_error(context: &str, error: &str) {
    tracing::error!(
        target: "relay.events",
        event = "error",
        context = %context,
        error = %error,
        "Error occurred"
    );
}
