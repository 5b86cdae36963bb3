//! # relay-model
//!
//! Model backends for the relay call chain.
//!
//! ## Backends
//!
//! - [`bedrock::BedrockClient`] - Amazon Bedrock through the Converse API (feature `bedrock`)
//! - [`MockLlm`] - Scripted replies for tests and offline runs

#[cfg(feature = "bedrock")]
pub mod bedrock;
pub mod mock;

#[cfg(feature = "bedrock")]
pub use bedrock::{BedrockClient, BedrockConfig, StaticCredentials};
pub use mock::MockLlm;
