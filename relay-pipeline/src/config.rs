//! Run configuration.
//!
//! A [`RelayConfig`] is built once at startup: defaults, then an optional
//! TOML file, then environment overrides, then CLI flags. It is validated
//! before anything talks to a model and passed by reference afterwards.
//!
//! ```toml
//! project_request = "create a simple two-player grid game"
//!
//! [stages.testing]
//! model_id = "amazon.nova-pro-v1:0"
//!
//! [transport]
//! request_timeout_secs = 60
//! ```

use crate::environment::Environment;
use crate::error::{PipelineError, Result};
use relay_core::{GenerateContentConfig, template_placeholders};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub use relay_telemetry::TelemetryConfig;

pub const DEFAULT_PROJECT_REQUEST: &str = "create a simple two-player grid game";
pub const DEFAULT_PREFLIGHT_MODEL: &str = "amazon.titan-text-express-v1";
pub const DEFAULT_PREFLIGHT_PROMPT: &str = "Say 'Hello World'";
pub const DEFAULT_MAX_TOKENS: i32 = 4000;

/// Environment variable overriding the project request.
pub const ENV_PROJECT_REQUEST: &str = "RELAY_PROJECT_REQUEST";
/// Environment variable overriding the log filter.
pub const ENV_LOG_LEVEL: &str = "RELAY_LOG_LEVEL";

/// Placeholder substituted with the project request.
pub const PLACEHOLDER_REQUEST: &str = "request";
pub const PLACEHOLDER_ARCHITECTURE: &str = "architecture";
pub const PLACEHOLDER_CODE: &str = "code";
pub const PLACEHOLDER_TESTS: &str = "tests";

const DOCUMENTATION_TEMPLATE: &str = "Act as a technical writer. \
    Create comprehensive documentation for this project. \
    Include setup instructions, usage guide, architecture overview, testing approach, \
    and API reference.\n\n\
    Architecture:\n{architecture}\n\n\
    Code Implementation:\n{code}\n\n\
    Test Suite:\n{tests}\n\n\
    Create documentation that explains the architecture decisions, \
    how to use the application, and how it was tested.";

/// Validation error with the offending field and an optional fix.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), suggestion: None }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// The four pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Architecture,
    Development,
    Testing,
    Documentation,
}

impl StageKind {
    pub const ALL: [StageKind; 4] = [
        StageKind::Architecture,
        StageKind::Development,
        StageKind::Testing,
        StageKind::Documentation,
    ];

    /// 1-based position in the chain.
    pub fn position(self) -> usize {
        match self {
            StageKind::Architecture => 1,
            StageKind::Development => 2,
            StageKind::Testing => 3,
            StageKind::Documentation => 4,
        }
    }

    /// Lowercase key used in config tables.
    pub fn key(self) -> &'static str {
        match self {
            StageKind::Architecture => "architecture",
            StageKind::Development => "development",
            StageKind::Testing => "testing",
            StageKind::Documentation => "documentation",
        }
    }

    /// Prefix of the `<PREFIX>_MODEL` environment override.
    pub fn env_prefix(self) -> &'static str {
        match self {
            StageKind::Architecture => "ARCHITECTURE",
            StageKind::Development => "DEVELOPMENT",
            StageKind::Testing => "TESTING",
            StageKind::Documentation => "DOCUMENTATION",
        }
    }

    pub fn model_env_key(self) -> String {
        format!("{}_MODEL", self.env_prefix())
    }

    /// Heading printed above the stage output.
    pub fn output_heading(self) -> &'static str {
        match self {
            StageKind::Architecture => "ARCHITECTURE",
            StageKind::Development => "CODE",
            StageKind::Testing => "TESTS",
            StageKind::Documentation => "DOCUMENTATION",
        }
    }

    /// Placeholders whose values exist by the time this stage runs.
    pub fn available_placeholders(self) -> &'static [&'static str] {
        match self {
            StageKind::Architecture => &[PLACEHOLDER_REQUEST],
            StageKind::Development => &[PLACEHOLDER_REQUEST, PLACEHOLDER_ARCHITECTURE],
            StageKind::Testing => {
                &[PLACEHOLDER_REQUEST, PLACEHOLDER_ARCHITECTURE, PLACEHOLDER_CODE]
            }
            StageKind::Documentation => &[
                PLACEHOLDER_REQUEST,
                PLACEHOLDER_ARCHITECTURE,
                PLACEHOLDER_CODE,
                PLACEHOLDER_TESTS,
            ],
        }
    }
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageKind::Architecture => write!(f, "Architecture"),
            StageKind::Development => write!(f, "Development"),
            StageKind::Testing => write!(f, "Testing"),
            StageKind::Documentation => write!(f, "Documentation"),
        }
    }
}

/// Model, instruction and prompt for one stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Name shown in progress lines and the timing summary.
    pub label: String,
    pub model_id: String,
    /// `None` is written as `""` so a rendered file keeps the system turn off.
    #[serde(
        default,
        serialize_with = "serialize_instruction",
        deserialize_with = "deserialize_instruction"
    )]
    pub system_instruction: Option<String>,
    /// Prompt with `{placeholder}` slots, see [`StageKind::available_placeholders`].
    pub prompt_template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

fn serialize_instruction<S>(
    instruction: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(instruction.as_deref().unwrap_or_default())
}

fn deserialize_instruction<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let instruction = String::deserialize(deserializer)?;
    Ok(Some(instruction).filter(|s| !s.trim().is_empty()))
}

impl StageConfig {
    /// Built-in configuration for a stage.
    pub fn builtin(kind: StageKind) -> Self {
        match kind {
            StageKind::Architecture => Self {
                label: "Architecture (Claude Sonnet)".to_string(),
                model_id: "anthropic.claude-3-sonnet-20240229-v1:0".to_string(),
                system_instruction: Some(
                    "You are a software architect. Create detailed technical specifications and \
                     architecture for software projects."
                        .to_string(),
                ),
                prompt_template: "Create a detailed architecture and rulebook for: {request}"
                    .to_string(),
                max_tokens: Some(DEFAULT_MAX_TOKENS),
                temperature: None,
            },
            StageKind::Development => Self {
                label: "Development (Claude Haiku)".to_string(),
                model_id: "anthropic.claude-3-haiku-20240307-v1:0".to_string(),
                system_instruction: Some(
                    "You are a software developer. \
                     Write clean, functional code based on specifications."
                        .to_string(),
                ),
                prompt_template:
                    "based on this architecture, produce an implementation:\n{architecture}"
                        .to_string(),
                max_tokens: Some(DEFAULT_MAX_TOKENS),
                temperature: None,
            },
            StageKind::Testing => Self {
                label: "Testing (Nova Lite)".to_string(),
                model_id: "amazon.nova-lite-v1:0".to_string(),
                system_instruction: Some(
                    "You are a QA engineer. \
                     Create comprehensive tests for code to ensure it works correctly."
                        .to_string(),
                ),
                prompt_template: "produce tests for this implementation:\n{code}".to_string(),
                max_tokens: Some(DEFAULT_MAX_TOKENS),
                temperature: Some(0.7),
            },
            StageKind::Documentation => Self {
                label: "Documentation (Titan Express)".to_string(),
                model_id: "amazon.titan-text-express-v1".to_string(),
                system_instruction: None,
                prompt_template: DOCUMENTATION_TEMPLATE.to_string(),
                max_tokens: Some(DEFAULT_MAX_TOKENS),
                temperature: Some(0.7),
            },
        }
    }

    /// Generation settings sent with every request of this stage.
    pub fn generation_config(&self) -> GenerateContentConfig {
        GenerateContentConfig {
            temperature: self.temperature,
            top_p: None,
            max_output_tokens: self.max_tokens,
        }
    }

    fn apply(&mut self, overrides: StageOverrides) {
        if let Some(label) = overrides.label {
            self.label = label;
        }
        if let Some(model_id) = overrides.model_id {
            self.model_id = model_id;
        }
        if let Some(instruction) = overrides.system_instruction {
            // An empty instruction in the file turns the system turn off.
            self.system_instruction = Some(instruction).filter(|s| !s.trim().is_empty());
        }
        if let Some(template) = overrides.prompt_template {
            self.prompt_template = template;
        }
        if overrides.max_tokens.is_some() {
            self.max_tokens = overrides.max_tokens;
        }
        if overrides.temperature.is_some() {
            self.temperature = overrides.temperature;
        }
    }

    fn validate(&self, kind: StageKind) -> std::result::Result<(), ValidationError> {
        let field = |name: &str| format!("stages.{}.{}", kind.key(), name);

        if self.label.trim().is_empty() {
            return Err(ValidationError::new(field("label"), "Stage label cannot be empty"));
        }
        if self.model_id.trim().is_empty() {
            return Err(ValidationError::new(field("model_id"), "Model identifier cannot be empty")
                .with_suggestion(format!("Set {} or the model_id key", kind.model_env_key())));
        }
        if self.prompt_template.trim().is_empty() {
            return Err(ValidationError::new(
                field("prompt_template"),
                "Prompt template cannot be empty",
            ));
        }

        let available = kind.available_placeholders();
        for name in template_placeholders(&self.prompt_template) {
            if !available.contains(&name.as_str()) {
                return Err(ValidationError::new(
                    field("prompt_template"),
                    format!(
                        "Placeholder '{{{name}}}' is not available in the {} stage",
                        kind.key()
                    ),
                )
                .with_suggestion(format!(
                    "Available placeholders: {}",
                    available.iter().map(|p| format!("{{{p}}}")).collect::<Vec<_>>().join(", ")
                )));
            }
        }

        if let Some(max_tokens) = self.max_tokens.filter(|t| *t <= 0) {
            return Err(ValidationError::new(
                field("max_tokens"),
                format!("max_tokens must be positive, got {max_tokens}"),
            ));
        }
        if let Some(temperature) = self.temperature.filter(|t| !(0.0..=1.0).contains(t)) {
            return Err(ValidationError::new(
                field("temperature"),
                format!("Temperature must be between 0.0 and 1.0, got {temperature}"),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagesConfig {
    pub architecture: StageConfig,
    pub development: StageConfig,
    pub testing: StageConfig,
    pub documentation: StageConfig,
}

impl Default for StagesConfig {
    fn default() -> Self {
        Self {
            architecture: StageConfig::builtin(StageKind::Architecture),
            development: StageConfig::builtin(StageKind::Development),
            testing: StageConfig::builtin(StageKind::Testing),
            documentation: StageConfig::builtin(StageKind::Documentation),
        }
    }
}

impl StagesConfig {
    pub fn get(&self, kind: StageKind) -> &StageConfig {
        match kind {
            StageKind::Architecture => &self.architecture,
            StageKind::Development => &self.development,
            StageKind::Testing => &self.testing,
            StageKind::Documentation => &self.documentation,
        }
    }

    pub fn get_mut(&mut self, kind: StageKind) -> &mut StageConfig {
        match kind {
            StageKind::Architecture => &mut self.architecture,
            StageKind::Development => &mut self.development,
            StageKind::Testing => &mut self.testing,
            StageKind::Documentation => &mut self.documentation,
        }
    }

    /// Stages paired with their configuration, in execution order.
    pub fn iter(&self) -> impl Iterator<Item = (StageKind, &StageConfig)> {
        StageKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// The single connectivity request made before the pipeline starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreflightConfig {
    pub enabled: bool,
    pub model_id: String,
    pub prompt: String,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model_id: DEFAULT_PREFLIGHT_MODEL.to_string(),
            prompt: DEFAULT_PREFLIGHT_PROMPT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Custom Bedrock endpoint (VPC endpoint, local proxy).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self { connect_timeout_secs: 5, request_timeout_secs: 30, endpoint_url: None }
    }
}

impl TransportConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Complete configuration for one relay run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Text that seeds the architecture stage.
    pub project_request: String,
    pub stages: StagesConfig,
    pub preflight: PreflightConfig,
    pub transport: TransportConfig,
    pub telemetry: TelemetryConfig,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            project_request: DEFAULT_PROJECT_REQUEST.to_string(),
            stages: StagesConfig::default(),
            preflight: PreflightConfig::default(),
            transport: TransportConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// On-disk form: every key optional, stage tables merged onto the built-ins.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    project_request: Option<String>,
    stages: StagesFile,
    preflight: PreflightConfig,
    transport: TransportConfig,
    telemetry: TelemetryConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StagesFile {
    architecture: StageOverrides,
    development: StageOverrides,
    testing: StageOverrides,
    documentation: StageOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StageOverrides {
    label: Option<String>,
    model_id: Option<String>,
    system_instruction: Option<String>,
    prompt_template: Option<String>,
    max_tokens: Option<i32>,
    temperature: Option<f32>,
}

impl RelayConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(text).map_err(|e| PipelineError::config(format!("invalid TOML: {e}")))?;

        let mut config = RelayConfig::default();
        if let Some(request) = file.project_request {
            config.project_request = request;
        }
        let StagesFile { architecture, development, testing, documentation } = file.stages;
        config.stages.architecture.apply(architecture);
        config.stages.development.apply(development);
        config.stages.testing.apply(testing);
        config.stages.documentation.apply(documentation);
        config.preflight = file.preflight;
        config.transport = file.transport;
        config.telemetry = file.telemetry;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
            .map_err(|e| PipelineError::config(format!("{}: {e}", path.display())))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PipelineError::config(format!("cannot render config: {e}")))
    }

    /// Apply overrides from the env file and process environment.
    pub fn apply_env(&mut self, env: &Environment) {
        for kind in StageKind::ALL {
            if let Some(model) = env.get(&kind.model_env_key()) {
                self.stages.get_mut(kind).model_id = model.to_string();
            }
        }
        if let Some(request) = env.get(ENV_PROJECT_REQUEST) {
            self.project_request = request.to_string();
        }
        if let Some(level) = env.get(ENV_LOG_LEVEL) {
            self.telemetry.log_level = level.to_string();
        }
    }

    /// Validate the configuration before any request is made.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.project_request.trim().is_empty() {
            return Err(ValidationError::new("project_request", "Project request cannot be empty")
                .with_suggestion(format!("Pass --request or set {ENV_PROJECT_REQUEST}")));
        }

        for (kind, stage) in self.stages.iter() {
            stage.validate(kind)?;
        }

        if self.preflight.enabled {
            if self.preflight.model_id.trim().is_empty() {
                return Err(ValidationError::new(
                    "preflight.model_id",
                    "Model identifier cannot be empty",
                ));
            }
            if self.preflight.prompt.trim().is_empty() {
                return Err(ValidationError::new("preflight.prompt", "Prompt cannot be empty"));
            }
        }

        if self.transport.connect_timeout_secs == 0 {
            return Err(ValidationError::new(
                "transport.connect_timeout_secs",
                "Timeout must be greater than 0",
            ));
        }
        if self.transport.request_timeout_secs == 0 {
            return Err(ValidationError::new(
                "transport.request_timeout_secs",
                "Timeout must be greater than 0",
            ));
        }
        let is_http = |url: &str| url.starts_with("http://") || url.starts_with("https://");
        let endpoint = self.transport.endpoint_url.as_ref();
        if let Some(url) = endpoint.filter(|url| !is_http(url.as_str())) {
            return Err(ValidationError::new(
                "transport.endpoint_url",
                format!("Endpoint '{url}' is not an http(s) URL"),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RelayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.project_request, "create a simple two-player grid game");
        assert_eq!(config.transport.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.transport.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builtin_models() {
        let stages = StagesConfig::default();
        assert_eq!(stages.architecture.model_id, "anthropic.claude-3-sonnet-20240229-v1:0");
        assert_eq!(stages.development.model_id, "anthropic.claude-3-haiku-20240307-v1:0");
        assert_eq!(stages.testing.model_id, "amazon.nova-lite-v1:0");
        assert_eq!(stages.documentation.model_id, "amazon.titan-text-express-v1");
        assert!(stages.documentation.system_instruction.is_none());
    }

    #[test]
    fn test_builtin_prompts_start_with_fixed_prefixes() {
        let stages = StagesConfig::default();
        let development = &stages.development.prompt_template;
        assert!(development.starts_with("based on this architecture, produce an implementation:"));
        let testing = &stages.testing.prompt_template;
        assert!(testing.starts_with("produce tests for this implementation:"));
        assert_eq!(
            template_placeholders(&stages.documentation.prompt_template),
            vec!["architecture", "code", "tests"]
        );
    }

    #[test]
    fn test_stage_order() {
        let positions: Vec<usize> = StageKind::ALL.iter().map(|k| k.position()).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
        assert_eq!(StageKind::Testing.model_env_key(), "TESTING_MODEL");
        assert_eq!(StageKind::Development.output_heading(), "CODE");
    }

    #[test]
    fn test_placeholder_not_yet_available_is_rejected() {
        let mut config = RelayConfig::default();
        config.stages.development.prompt_template = "Test this: {code}".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "stages.development.prompt_template");
        assert!(err.message.contains("{code}"));
        assert!(err.suggestion.unwrap().contains("{architecture}"));
    }

    #[test]
    fn test_unknown_placeholder_is_rejected() {
        let mut config = RelayConfig::default();
        config.stages.architecture.prompt_template = "Design {thing}".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_identifier_braces_are_literal() {
        let mut config = RelayConfig::default();
        config.stages.testing.prompt_template =
            "Emit JSON like {\"ok\": true} for:\n{code}".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_temperature_range() {
        let mut config = RelayConfig::default();
        config.stages.testing.temperature = Some(1.5);
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "stages.testing.temperature");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = RelayConfig::default();
        config.transport.request_timeout_secs = 0;
        assert_eq!(config.validate().unwrap_err().field, "transport.request_timeout_secs");
    }

    #[test]
    fn test_empty_request_rejected() {
        let config = RelayConfig { project_request: "  ".to_string(), ..Default::default() };
        assert_eq!(config.validate().unwrap_err().field, "project_request");
    }

    #[test]
    fn test_partial_stage_table_keeps_builtins() {
        let config = RelayConfig::from_toml_str(
            r#"
            [stages.testing]
            model_id = "amazon.nova-pro-v1:0"
            "#,
        )
        .unwrap();
        assert_eq!(config.stages.testing.model_id, "amazon.nova-pro-v1:0");
        assert_eq!(config.stages.testing.label, "Testing (Nova Lite)");
        assert_eq!(config.stages.architecture, StageConfig::builtin(StageKind::Architecture));
    }

    #[test]
    fn test_empty_system_instruction_disables_it() {
        let config = RelayConfig::from_toml_str(
            r#"
            [stages.architecture]
            system_instruction = ""
            "#,
        )
        .unwrap();
        assert!(config.stages.architecture.system_instruction.is_none());
    }

    #[test]
    fn test_disabled_instruction_survives_rendering() {
        let config =
            RelayConfig::from_toml_str("[stages.architecture]\nsystem_instruction = \"\"").unwrap();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("system_instruction = \"\""));

        let parsed = RelayConfig::from_toml_str(&text).unwrap();
        assert!(parsed.stages.architecture.system_instruction.is_none());
        assert_eq!(parsed.stages.development, config.stages.development);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = RelayConfig::from_toml_str("[stages.review]\nmodel_id = \"x\"").unwrap_err();
        assert!(matches!(err, PipelineError::Configuration(_)));
    }

    #[test]
    fn test_rendered_toml_parses_back() {
        let mut config = RelayConfig::default();
        config.transport.endpoint_url = Some("https://bedrock.internal".to_string());
        config.stages.architecture.system_instruction = None;
        let text = config.to_toml_string().unwrap();
        let parsed = RelayConfig::from_toml_str(&text).unwrap();
        assert!(parsed.stages.architecture.system_instruction.is_none());
        assert!(parsed.stages.documentation.system_instruction.is_none());
        assert_eq!(parsed.stages.development, config.stages.development);
        assert_eq!(parsed.transport, config.transport);
        assert_eq!(parsed.project_request, config.project_request);
    }
}
