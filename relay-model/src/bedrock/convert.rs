//! Type conversions between relay and Amazon Bedrock Converse API types.

use aws_sdk_bedrockruntime::types::{
    self as bedrock, ContentBlock, ConversationRole, ConverseOutput, InferenceConfiguration,
    Message, StopReason, SystemContentBlock,
};
use relay_core::{Content, FinishReason, GenerateContentConfig, LlmResponse, Part, UsageMetadata};

/// Result of converting an `LlmRequest` into Bedrock Converse API inputs.
///
/// System messages are extracted separately since the Converse API takes them
/// as a distinct parameter rather than inline with conversation messages.
pub(crate) struct BedrockConverseInput {
    pub messages: Vec<Message>,
    pub system: Vec<SystemContentBlock>,
    pub inference_config: Option<InferenceConfiguration>,
}

/// Convert request contents and generation config into Converse inputs.
pub(crate) fn relay_request_to_bedrock(
    contents: &[Content],
    config: Option<&GenerateContentConfig>,
) -> Result<BedrockConverseInput, String> {
    let mut messages = Vec::new();
    let mut system = Vec::new();

    for content in contents {
        match content.role.as_str() {
            "system" => {
                for text in content.parts.iter().filter_map(Part::text) {
                    if !text.is_empty() {
                        system.push(SystemContentBlock::Text(text.to_string()));
                    }
                }
            }
            role => {
                let bedrock_role = match role {
                    "model" | "assistant" => ConversationRole::Assistant,
                    _ => ConversationRole::User,
                };

                let blocks: Vec<ContentBlock> = content
                    .parts
                    .iter()
                    .filter_map(Part::text)
                    .filter(|text| !text.is_empty())
                    .map(|text| ContentBlock::Text(text.to_string()))
                    .collect();

                if !blocks.is_empty() {
                    let msg = Message::builder()
                        .role(bedrock_role)
                        .set_content(Some(blocks))
                        .build()
                        .map_err(|e| format!("Failed to build Bedrock message: {e}"))?;
                    messages.push(msg);
                }
            }
        }
    }

    if messages.is_empty() {
        return Err("request has no user or assistant text".to_string());
    }

    let inference_config = config.map(relay_config_to_bedrock);

    Ok(BedrockConverseInput { messages, system, inference_config })
}

fn relay_config_to_bedrock(config: &GenerateContentConfig) -> InferenceConfiguration {
    let mut builder = InferenceConfiguration::builder();

    if let Some(temp) = config.temperature {
        builder = builder.temperature(temp);
    }
    if let Some(top_p) = config.top_p {
        builder = builder.top_p(top_p);
    }
    if let Some(max_tokens) = config.max_output_tokens {
        builder = builder.max_tokens(max_tokens);
    }

    builder.build()
}

/// Convert a Converse response to an `LlmResponse`.
pub(crate) fn bedrock_response_to_relay(
    output: &ConverseOutput,
    stop_reason: &StopReason,
    usage: Option<&bedrock::TokenUsage>,
) -> LlmResponse {
    let content = match output {
        ConverseOutput::Message(message) => {
            let parts = bedrock_content_blocks_to_parts(&message.content);
            if parts.is_empty() { None } else { Some(Content { role: "model".to_string(), parts }) }
        }
        _ => None,
    };

    let usage_metadata = usage.map(|u| UsageMetadata {
        prompt_token_count: u.input_tokens,
        candidates_token_count: u.output_tokens,
        total_token_count: u.total_tokens,
    });

    LlmResponse {
        content,
        usage_metadata,
        finish_reason: Some(bedrock_stop_reason_to_relay(stop_reason)),
    }
}

fn bedrock_content_blocks_to_parts(blocks: &[ContentBlock]) -> Vec<Part> {
    blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text(text) => Some(Part::Text { text: text.clone() }),
            ContentBlock::ReasoningContent(_) => Some(Part::Other { kind: "reasoning".into() }),
            ContentBlock::ToolUse(_) => Some(Part::Other { kind: "tool_use".into() }),
            ContentBlock::Image(_) => Some(Part::Other { kind: "image".into() }),
            _ => None,
        })
        .collect()
}

fn bedrock_stop_reason_to_relay(stop_reason: &StopReason) -> FinishReason {
    match stop_reason {
        StopReason::EndTurn | StopReason::StopSequence | StopReason::ToolUse => FinishReason::Stop,
        StopReason::MaxTokens => FinishReason::MaxTokens,
        StopReason::ContentFiltered | StopReason::GuardrailIntervened => FinishReason::Safety,
        _ => FinishReason::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(message: &Message, index: usize) -> &str {
        match &message.content[index] {
            ContentBlock::Text(text) => text,
            other => panic!("expected text block, got {other:?}"),
        }
    }

    #[test]
    fn test_system_message_extraction() {
        let contents = vec![
            Content::new("system").with_text("You are a software architect."),
            Content::new("user").with_text("Design a grid game"),
        ];

        let input = relay_request_to_bedrock(&contents, None).unwrap();

        assert_eq!(input.system.len(), 1);
        assert!(matches!(
            &input.system[0],
            SystemContentBlock::Text(t) if t == "You are a software architect."
        ));
        assert_eq!(input.messages.len(), 1);
        assert_eq!(input.messages[0].role, ConversationRole::User);
        assert_eq!(text_of(&input.messages[0], 0), "Design a grid game");
        assert!(input.inference_config.is_none());
    }

    #[test]
    fn test_empty_system_text_is_skipped() {
        let contents =
            vec![Content::new("system").with_text(""), Content::new("user").with_text("hi")];
        let input = relay_request_to_bedrock(&contents, None).unwrap();
        assert!(input.system.is_empty());
    }

    #[test]
    fn test_request_without_user_text_is_rejected() {
        let contents = vec![Content::new("system").with_text("only system")];
        assert!(relay_request_to_bedrock(&contents, None).is_err());
    }

    #[test]
    fn test_inference_config_mapping() {
        let config = GenerateContentConfig {
            temperature: Some(0.7),
            top_p: None,
            max_output_tokens: Some(4000),
        };
        let contents = vec![Content::new("user").with_text("hi")];
        let input = relay_request_to_bedrock(&contents, Some(&config)).unwrap();
        let inference = input.inference_config.unwrap();
        assert_eq!(inference.max_tokens, Some(4000));
        assert_eq!(inference.temperature, Some(0.7));
        assert_eq!(inference.top_p, None);
    }

    #[test]
    fn test_response_conversion_keeps_block_order() {
        let message = Message::builder()
            .role(ConversationRole::Assistant)
            .content(ContentBlock::Text("first".to_string()))
            .content(ContentBlock::Text("second".to_string()))
            .build()
            .unwrap();
        let usage = bedrock::TokenUsage::builder()
            .input_tokens(10)
            .output_tokens(5)
            .total_tokens(15)
            .build()
            .unwrap();

        let response = bedrock_response_to_relay(
            &ConverseOutput::Message(message),
            &StopReason::EndTurn,
            Some(&usage),
        );

        assert_eq!(response.first_text(), Some("first"));
        assert_eq!(response.finish_reason, Some(FinishReason::Stop));
        let usage = response.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, 10);
        assert_eq!(usage.candidates_token_count, 5);
        assert_eq!(usage.total_token_count, 15);
    }

    #[test]
    fn test_stop_reason_mapping() {
        assert_eq!(bedrock_stop_reason_to_relay(&StopReason::MaxTokens), FinishReason::MaxTokens);
        assert_eq!(
            bedrock_stop_reason_to_relay(&StopReason::ContentFiltered),
            FinishReason::Safety
        );
        assert_eq!(bedrock_stop_reason_to_relay(&StopReason::EndTurn), FinishReason::Stop);
    }
}
