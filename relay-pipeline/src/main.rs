//! relay - four-stage Bedrock call chain.
//!
//! ## Usage
//!
//! ```bash
//! # Run with credentials from ./.env (or up to three parent directories)
//! relay
//!
//! # Explicit env file and a different request
//! relay --env-file ~/bedrock.env --request "create a command-line chess clock"
//!
//! # Print the resolved configuration
//! relay config --config relay.toml
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use relay_model::bedrock::{BedrockClient, BedrockConfig};
use relay_pipeline::{
    AwsSettings, Environment, Pipeline, PipelineError, PipelineOutput, RelayConfig,
    check_connectivity, environment::resolve_region,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

/// relay - architecture, code, tests and documentation from four chained Bedrock models
#[derive(Parser, Debug)]
#[command(name = "relay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Env file with AWS credentials (default: search .env upwards from the working directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    env_file: Option<PathBuf>,

    /// Project request that seeds the architecture stage
    #[arg(short, long, global = true)]
    request: Option<String>,

    /// Skip the connectivity check
    #[arg(long, global = true)]
    skip_preflight: bool,

    /// Log filter, e.g. `info` or `relay_pipeline=debug`
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Run the pipeline (default)
    Run,
    /// Print and validate the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = PipelineOutput::console();

    match run(cli, &output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = match err.downcast_ref::<PipelineError>() {
                Some(pipeline_err) => {
                    report(pipeline_err, &output);
                    pipeline_err.exit_code()
                }
                None => {
                    output.error(&format!("{err:#}"));
                    1
                }
            };
            ExitCode::from(code as u8)
        }
    }
}

/// Print startup errors. Stage failures were already reported by the pipeline.
fn report(err: &PipelineError, output: &PipelineOutput) {
    if !err.is_startup() {
        return;
    }
    match err {
        PipelineError::MissingCredentials { .. } => {
            output.error(&err.to_string());
            output.hint(&format!("Create a {} file containing:", ".env".cyan()));
            output.hint("AWS_ACCESS_KEY_ID=your-access-key");
            output.hint("AWS_SECRET_ACCESS_KEY=your-secret-key");
            output.hint("AWS_DEFAULT_REGION=us-east-1");
            output.hint("or pass --env-file, or export the variables in your shell");
        }
        _ => output.error(&err.to_string()),
    }
}

fn resolve_config(cli: &Cli, env: &Environment) -> anyhow::Result<RelayConfig> {
    let mut config = match &cli.config {
        Some(path) => RelayConfig::from_toml_file(path)?,
        None => RelayConfig::default(),
    };

    config.apply_env(env);

    if let Some(request) = &cli.request {
        config.project_request = request.clone();
    }
    if let Some(level) = &cli.log_level {
        config.telemetry.log_level = level.clone();
    }
    if cli.json_logs {
        config.telemetry.json = true;
    }
    if cli.skip_preflight {
        config.preflight.enabled = false;
    }
    Ok(config)
}

async fn run(cli: Cli, output: &PipelineOutput) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let env = Environment::load(cli.env_file.as_deref(), &cwd)?;
    let config = resolve_config(&cli, &env);

    // Default logging when the config file cannot be used.
    match &config {
        Ok(config) => relay_telemetry::init_with_config(&config.telemetry)?,
        Err(_) => relay_telemetry::init_telemetry("relay")?,
    }
    if let Some(file) = env.file() {
        file.warn_skipped();
    }
    let config = config?;
    debug!(
        searched = ?env.searched(),
        file = ?env.file().map(|f| f.path()),
        "environment resolved"
    );

    if cli.command == Some(Commands::Config) {
        println!("{}", config.to_toml_string()?);
        config.validate().map_err(PipelineError::from)?;
        let region = resolve_region(&env);
        println!("{} configuration is valid (region {region})", "✓".bright_green());
        return Ok(());
    }

    config.validate().map_err(PipelineError::from)?;
    let aws = AwsSettings::from_environment(&env)?;

    output.header();
    output.env_source(env.file().map(|f| f.path()));
    output.config_summary(&config, &aws.region);

    let mut bedrock = BedrockConfig::new(aws.region.clone())
        .with_credentials(aws.credentials)
        .with_connect_timeout(config.transport.connect_timeout())
        .with_request_timeout(config.transport.request_timeout());
    if let Some(url) = &config.transport.endpoint_url {
        bedrock = bedrock.with_endpoint_url(url.clone());
    }

    let client: Arc<dyn relay_core::Llm> =
        Arc::new(BedrockClient::new(bedrock).await.map_err(PipelineError::from)?);

    if config.preflight.enabled {
        check_connectivity(client.clone(), &config.preflight, &aws.region, output).await?;
    } else {
        info!("connectivity check skipped");
    }

    let mut pipeline = Pipeline::new(config, client, output.clone(), aws.region);
    pipeline.run().await?;
    Ok(())
}
