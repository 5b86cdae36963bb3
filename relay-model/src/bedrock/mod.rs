//! Amazon Bedrock backend.
//!
//! Calls Bedrock models through the AWS SDK Converse API. Requires the
//! `bedrock` feature flag (enabled by default).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use relay_model::bedrock::{BedrockClient, BedrockConfig};
//!
//! let client = BedrockClient::new(BedrockConfig::new("us-east-1")).await?;
//! ```
//!
//! # Authentication
//!
//! Credentials passed through [`BedrockConfig::with_credentials`] are used as
//! given. Without them the standard AWS credential chain applies
//! (environment variables, `~/.aws/credentials`, IMDS).

mod client;
mod config;
pub(crate) mod convert;

pub use client::BedrockClient;
pub use config::{
    BedrockConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, StaticCredentials,
};
