//! Human-readable console report.
//!
//! Progress and stage output go to stdout. Failure diagnostics go to stderr.
//! Logs are separate and handled by `relay-telemetry`.

use crate::config::{RelayConfig, StageKind};
use crate::stage::TimingLog;
use colored::{ColoredString, Colorize};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone)]
enum Sink {
    Stdout,
    Stderr,
    Buffer(Arc<Mutex<Vec<u8>>>),
}

impl Sink {
    fn write_line(&self, line: &str) {
        // A closed console is not worth failing a run over.
        let _ = match self {
            Sink::Stdout => writeln!(std::io::stdout().lock(), "{line}"),
            Sink::Stderr => writeln!(std::io::stderr().lock(), "{line}"),
            Sink::Buffer(buf) => match buf.lock() {
                Ok(mut buf) => writeln!(buf, "{line}"),
                Err(_) => Ok(()),
            },
        };
    }
}

/// Captured output of a buffered [`PipelineOutput`].
#[derive(Debug, Clone)]
pub struct OutputCapture {
    out: Arc<Mutex<Vec<u8>>>,
    err: Arc<Mutex<Vec<u8>>>,
}

impl OutputCapture {
    pub fn stdout(&self) -> String {
        Self::read(&self.out)
    }

    pub fn stderr(&self) -> String {
        Self::read(&self.err)
    }

    fn read(buf: &Arc<Mutex<Vec<u8>>>) -> String {
        buf.lock().map(|b| String::from_utf8_lossy(&b).into_owned()).unwrap_or_default()
    }
}

/// Writer for the pipeline report.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    out: Sink,
    err: Sink,
    plain: bool,
}

impl Default for PipelineOutput {
    fn default() -> Self {
        Self::console()
    }
}

impl PipelineOutput {
    /// Report on stdout, diagnostics on stderr.
    pub fn console() -> Self {
        Self { out: Sink::Stdout, err: Sink::Stderr, plain: false }
    }

    /// Uncolored output into in-memory buffers.
    pub fn buffered() -> (Self, OutputCapture) {
        let out = Arc::new(Mutex::new(Vec::new()));
        let err = Arc::new(Mutex::new(Vec::new()));
        let output =
            Self { out: Sink::Buffer(out.clone()), err: Sink::Buffer(err.clone()), plain: true };
        (output, OutputCapture { out, err })
    }

    fn paint(&self, text: ColoredString) -> ColoredString {
        if self.plain { text.clear() } else { text }
    }

    fn line(&self, text: impl AsRef<str>) {
        self.out.write_line(text.as_ref());
    }

    fn err_line(&self, text: impl AsRef<str>) {
        self.err.write_line(text.as_ref());
    }

    pub fn header(&self) {
        let title = self.paint("Relay: Bedrock 4-Agent Pipeline".bright_white().bold());
        self.line(format!("{title}"));
        self.line("=".repeat(RULE_WIDTH));
    }

    pub fn env_source(&self, path: Option<&Path>) {
        match path {
            Some(path) => self.line(format!(
                "  {} Loaded environment from {}",
                self.paint("•".bright_black()),
                path.display()
            )),
            None => self.line(format!(
                "  {} No env file found, using the process environment",
                self.paint("•".bright_black())
            )),
        }
    }

    pub fn config_summary(&self, config: &RelayConfig, region: &str) {
        self.line(format!("{}", self.paint("Model Configuration:".yellow().bold())));
        for (kind, stage) in config.stages.iter() {
            let model = self.paint(stage.model_id.as_str().cyan());
            self.line(format!("  {:<14} {}", format!("{kind}:"), model));
        }
        self.line(format!("  {:<14} {}", "Region:", region));
        self.line("");
    }

    pub fn preflight_start(&self, model: &str) {
        let glyph = self.paint("▶".bright_cyan());
        self.line(format!("{glyph} Checking connectivity with {model}..."));
    }

    /// `reply` is already truncated by the caller.
    pub fn preflight_ok(&self, reply: &str) {
        self.line(format!("  {} Connectivity OK: {}", self.paint("✓".bright_green()), reply));
        self.line("");
    }

    pub fn preflight_failed(&self, region: &str, message: &str) {
        let glyph = self.paint("✗".bright_red());
        self.err_line(format!("{glyph} Connectivity check failed: {message}"));
        self.err_line("Please check that:");
        self.err_line("  1. AWS credentials are valid");
        self.err_line(format!("  2. You have access to Bedrock models in region {region}"));
        self.err_line("  3. The network can reach the Bedrock endpoint");
    }

    pub fn stage_start(&self, kind: StageKind, label: &str) {
        self.line(format!(
            "{} [{}/{}] {}...",
            self.paint("▶".bright_cyan()),
            kind.position(),
            StageKind::ALL.len(),
            self.paint(label.bright_white().bold())
        ));
    }

    pub fn stage_output(&self, kind: StageKind, text: &str) {
        self.line("");
        let heading = format!("=== {} ===", kind.output_heading());
        self.line(format!("{}", self.paint(heading.bright_white().bold())));
        self.line(text);
        self.line("");
    }

    pub fn stage_success(&self, kind: StageKind, elapsed: Duration) {
        self.line(format!(
            "  {} Stage {} completed successfully in {:.2} seconds",
            self.paint("✓".bright_green()),
            kind.position(),
            elapsed.as_secs_f64()
        ));
        self.line("");
    }

    pub fn stage_failure(
        &self,
        kind: StageKind,
        label: &str,
        elapsed: Duration,
        message: &str,
        model: &str,
        region: &str,
    ) {
        self.err_line(format!(
            "{} Stage {} ({}) failed after {:.2} seconds",
            self.paint("✗".bright_red().bold()),
            kind.position(),
            label,
            elapsed.as_secs_f64()
        ));
        self.err_line(format!("  Error: {message}"));
        self.err_line("Possible causes:");
        self.err_line("  1. Network connectivity issues");
        self.err_line("  2. Invalid AWS credentials");
        self.err_line(format!("  3. Model {model} not available in region {region}"));
        self.err_line("  4. Insufficient permissions for the model");
    }

    /// Final banner, one line per completed stage label.
    pub fn completion_banner<'a>(&self, labels: impl IntoIterator<Item = &'a str>) {
        self.line("");
        self.line("=".repeat(RULE_WIDTH));
        let banner =
            self.paint("✓ PIPELINE COMPLETE - 4 AGENTS COLLABORATED".bright_green().bold());
        self.line(format!("{banner}"));
        self.line("=".repeat(RULE_WIDTH));
        for label in labels {
            self.line(format!("{} {}", self.paint("[DONE]".green()), label));
        }
        self.line("=".repeat(RULE_WIDTH));
    }

    pub fn pipeline_failed(&self, message: &str, elapsed: Duration) {
        self.err_line("");
        let glyph = self.paint("✗ PIPELINE FAILED:".bright_red().bold());
        self.err_line(format!("{glyph} {message}"));
        self.err_line(format!("Time spent before failure: {:.2} seconds", elapsed.as_secs_f64()));
    }

    pub fn timing_summary(&self, timings: &TimingLog, total: Duration) {
        self.line("");
        self.line(format!("{}", self.paint("TIMING SUMMARY".yellow().bold())));
        self.line("-".repeat(RULE_WIDTH));
        for timing in timings.entries() {
            let glyph = if timing.success() {
                self.paint("✓".bright_green())
            } else {
                self.paint("✗".bright_red())
            };
            self.line(format!("{:<35}: {:>8.2} sec {}", timing.name(), timing.seconds(), glyph));
        }
        self.line("-".repeat(RULE_WIDTH));
        self.line(format!("Total Pipeline Time: {:.2} seconds", total.as_secs_f64()));
        self.line("=".repeat(RULE_WIDTH));
    }

    /// A fatal error outside any stage.
    pub fn error(&self, message: &str) {
        self.err_line(format!("{} {}", self.paint("✗ Error:".bright_red().bold()), message));
    }

    pub fn hint(&self, message: &str) {
        self.err_line(format!("  {} {}", self.paint("→".bright_blue()), message));
    }
}
