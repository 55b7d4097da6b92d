//! Text-generation provider — the LLM fallback for unrouted requests.
//!
//! Supports:
//! - **Anthropic**: Direct API access via rig-core
//! - **OpenAI**: Direct API access via rig-core
//!
//! Uses the rig-core crate for HTTP transport; `RigTextGen` bridges rig's
//! `CompletionModel` trait to our `TextGenProvider` trait.

use std::sync::Arc;

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::{AssistantContent, CompletionModel};
use secrecy::ExposeSecret;

use crate::error::ProviderError;

/// An external service that turns a system instruction plus user text into a
/// natural-language reply.
#[async_trait]
pub trait TextGenProvider: Send + Sync {
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
    ) -> Result<String, ProviderError>;

    /// The model name, for logging.
    fn model_name(&self) -> &str;
}

/// Supported LLM backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmBackend {
    Anthropic,
    OpenAi,
}

/// Configuration for creating a text-generation provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub backend: LlmBackend,
    pub api_key: secrecy::SecretString,
    pub model: String,
    pub max_tokens: u64,
}

/// Create a text-generation provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn TextGenProvider>, ProviderError> {
    match config.backend {
        LlmBackend::Anthropic => create_anthropic_provider(config),
        LlmBackend::OpenAi => create_openai_provider(config),
    }
}

fn create_anthropic_provider(
    config: &LlmConfig,
) -> Result<Arc<dyn TextGenProvider>, ProviderError> {
    use rig::providers::anthropic;

    let client: rig::client::Client<anthropic::client::AnthropicExt> =
        anthropic::Client::new(config.api_key.expose_secret()).map_err(|e| {
            ProviderError::RequestFailed {
                provider: "anthropic".to_string(),
                reason: format!("Failed to create Anthropic client: {}", e),
            }
        })?;

    let model = client.completion_model(&config.model);
    tracing::info!("Using Anthropic (model: {})", config.model);
    Ok(Arc::new(RigTextGen::new(
        model,
        &config.model,
        config.max_tokens,
    )))
}

fn create_openai_provider(config: &LlmConfig) -> Result<Arc<dyn TextGenProvider>, ProviderError> {
    use rig::providers::openai;

    let client: rig::client::Client<openai::client::OpenAIResponsesExt> =
        openai::Client::new(config.api_key.expose_secret()).map_err(|e| {
            ProviderError::RequestFailed {
                provider: "openai".to_string(),
                reason: format!("Failed to create OpenAI client: {}", e),
            }
        })?;

    let model = client.completion_model(&config.model);
    tracing::info!("Using OpenAI (model: {})", config.model);
    Ok(Arc::new(RigTextGen::new(
        model,
        &config.model,
        config.max_tokens,
    )))
}

/// Adapter from a rig `CompletionModel` to `TextGenProvider`.
pub struct RigTextGen<M: CompletionModel> {
    model: M,
    model_name: String,
    max_tokens: u64,
}

impl<M: CompletionModel> RigTextGen<M> {
    pub fn new(model: M, model_name: &str, max_tokens: u64) -> Self {
        Self {
            model,
            model_name: model_name.to_string(),
            max_tokens,
        }
    }
}

#[async_trait]
impl<M: CompletionModel> TextGenProvider for RigTextGen<M> {
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
    ) -> Result<String, ProviderError> {
        let request = self
            .model
            .completion_request(user_text)
            .preamble(system_instruction.to_string())
            .max_tokens(self.max_tokens)
            .build();

        let response = self.model.completion(request).await.map_err(|e| {
            ProviderError::RequestFailed {
                provider: self.model_name.clone(),
                reason: e.to_string(),
            }
        })?;

        let text = response
            .choice
            .iter()
            .filter_map(|content| match content {
                AssistantContent::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        if text.is_empty() {
            return Err(ProviderError::InvalidResponse {
                provider: self.model_name.clone(),
                reason: "completion contained no text content".to_string(),
            });
        }

        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_provider_with_any_key_constructs() {
        // rig-core clients accept any string as API key at construction time.
        // The actual auth failure happens when making a request.
        let config = LlmConfig {
            backend: LlmBackend::Anthropic,
            api_key: secrecy::SecretString::from("test-key"),
            model: "claude-3-5-sonnet-latest".to_string(),
            max_tokens: 200,
        };
        let provider = create_provider(&config);
        assert!(provider.is_ok());
        assert_eq!(provider.unwrap().model_name(), "claude-3-5-sonnet-latest");
    }

    #[test]
    fn create_openai_provider_constructs() {
        let config = LlmConfig {
            backend: LlmBackend::OpenAi,
            api_key: secrecy::SecretString::from("sk-test"),
            model: "gpt-4o".to_string(),
            max_tokens: 200,
        };
        let provider = create_provider(&config);
        assert!(provider.is_ok());
        assert_eq!(provider.unwrap().model_name(), "gpt-4o");
    }
}
