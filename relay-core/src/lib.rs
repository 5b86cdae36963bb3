//! # relay-core
//!
//! Core traits and types for the relay call chain.
//!
//! ## Overview
//!
//! - [`Llm`] - The seam between the pipeline and any text-generation backend
//! - [`LlmRequest`] / [`LlmResponse`] / [`Content`] - Provider-neutral message types
//! - [`RelayError`] / [`Result`] - Unified error handling
//! - [`clean_text`] - ASCII normalisation applied to every model reply
//! - [`render_template`] - Single-pass `{placeholder}` substitution for prompts
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use relay_core::{Content, Llm, LlmRequest};
//!
//! let request = LlmRequest::new(
//!     "amazon.nova-lite-v1:0",
//!     vec![Content::new("user").with_text("Say hello")],
//! );
//! let response = llm.generate_content(request).await?;
//! println!("{}", response.first_text().unwrap_or_default());
//! ```

pub mod error;
pub mod model;
pub mod sanitize;
pub mod template;
pub mod types;

pub use error::{RelayError, Result};
pub use model::{FinishReason, GenerateContentConfig, Llm, LlmRequest, LlmResponse, UsageMetadata};
pub use sanitize::clean_text;
pub use template::{render_template, template_placeholders};
pub use types::{Content, Part};
