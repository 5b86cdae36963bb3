//! Amazon Bedrock client implementation.
//!
//! Uses the AWS SDK Converse API for non-streaming inference. The SDK
//! configuration (region, credentials, timeouts) is resolved once when the
//! client is created and shared by every request made through it.

use super::config::BedrockConfig;
use super::convert::{BedrockConverseInput, bedrock_response_to_relay, relay_request_to_bedrock};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use relay_core::{Llm, LlmRequest, LlmResponse, RelayError, Result};
use tracing::{debug, info, instrument};

/// Amazon Bedrock client backed by the AWS SDK Converse API.
///
/// One client serves any number of model identifiers; the model is taken from
/// [`LlmRequest::model`] on every call.
///
/// # Example
///
/// ```rust,ignore
/// use relay_model::bedrock::{BedrockClient, BedrockConfig};
///
/// let client = BedrockClient::new(BedrockConfig::new("us-east-1")).await?;
/// let response = client.generate_content(request).await?;
/// ```
pub struct BedrockClient {
    client: aws_sdk_bedrockruntime::Client,
    region: String,
}

impl BedrockClient {
    /// Create a new Bedrock client from the given configuration.
    ///
    /// Explicit credentials in the config take precedence over the standard
    /// AWS credential chain. Connect and request timeouts are applied to
    /// every call made through this client.
    pub async fn new(config: BedrockConfig) -> Result<Self> {
        if config.region.trim().is_empty() {
            return Err(RelayError::Config("Bedrock region must not be empty".to_string()));
        }

        let region = config.region.clone();

        let timeouts = aws_config::timeout::TimeoutConfig::builder()
            .connect_timeout(config.connect_timeout)
            .operation_timeout(config.request_timeout)
            .build();

        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .timeout_config(timeouts);

        if let Some(endpoint_url) = &config.endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint_url);
        }

        if let Some(credentials) = config.credentials {
            let provider = aws_sdk_bedrockruntime::config::Credentials::new(
                credentials.access_key_id,
                credentials.secret_access_key,
                credentials.session_token,
                None,
                "relay-environment",
            );
            sdk_config_loader = sdk_config_loader.credentials_provider(provider);
        }

        let sdk_config = sdk_config_loader.load().await;
        let client = aws_sdk_bedrockruntime::Client::new(&sdk_config);

        info!(
            region = %region,
            connect_timeout_ms = config.connect_timeout.as_millis() as u64,
            request_timeout_ms = config.request_timeout.as_millis() as u64,
            "bedrock client created"
        );

        Ok(Self { client, region })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    async fn converse(&self, model_id: &str, input: BedrockConverseInput) -> Result<LlmResponse> {
        debug!("bedrock converse for model={model_id}");

        let system = if input.system.is_empty() { None } else { Some(input.system) };

        let response = self
            .client
            .converse()
            .model_id(model_id)
            .set_messages(Some(input.messages))
            .set_system(system)
            .set_inference_config(input.inference_config)
            .send()
            .await
            .map_err(|e| {
                RelayError::Model(format!(
                    "Bedrock API error for region={}, model={model_id}: {}",
                    self.region,
                    DisplayErrorContext(&e)
                ))
            })?;

        let output = response.output.ok_or_else(|| {
            RelayError::Model(format!("Bedrock response missing output for model={model_id}"))
        })?;

        Ok(bedrock_response_to_relay(&output, &response.stop_reason, response.usage.as_ref()))
    }
}

#[async_trait]
impl Llm for BedrockClient {
    fn name(&self) -> &str {
        "bedrock"
    }

    #[instrument(skip_all, fields(model_id = %request.model, region = %self.region))]
    async fn generate_content(&self, request: LlmRequest) -> Result<LlmResponse> {
        let input = relay_request_to_bedrock(&request.contents, request.config.as_ref()).map_err(
            |e| {
                RelayError::Model(format!(
                    "Bedrock request conversion failed for region={}, model={}: {e}",
                    self.region, request.model
                ))
            },
        )?;

        self.converse(&request.model, input).await
    }
}
