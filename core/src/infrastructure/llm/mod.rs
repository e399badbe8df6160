use crate::domain::{
    collaborators::{GeneratedImage, LLMClient},
    common::{LLMConfig, entities::app_errors::CoreError},
};

pub mod gemini_client;

pub use gemini_client::GeminiLLMClient;

/// The configured LLM backend. `Disabled` answers every call with
/// [`CoreError::CollaboratorUnavailable`] so callers take their local fallback.
#[derive(Debug, Clone)]
pub enum LlmCollaborator {
    Gemini(GeminiLLMClient),
    Disabled,
}

impl LlmCollaborator {
    pub fn from_config(config: &LLMConfig) -> Self {
        match config.gemini_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => LlmCollaborator::Gemini(GeminiLLMClient::new(
                key.to_string(),
                config.gemini_model.clone(),
                config.gemini_image_model.clone(),
            )),
            _ => {
                tracing::warn!("no Gemini API key configured, collaborators are disabled");
                LlmCollaborator::Disabled
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, LlmCollaborator::Gemini(_))
    }
}

impl LLMClient for LlmCollaborator {
    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        match self {
            LlmCollaborator::Gemini(client) => {
                client
                    .generate_with_image(prompt, image_data, response_schema)
                    .await
            }
            LlmCollaborator::Disabled => Err(CoreError::CollaboratorUnavailable),
        }
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        match self {
            LlmCollaborator::Gemini(client) => {
                client.generate_with_text(prompt, response_schema).await
            }
            LlmCollaborator::Disabled => Err(CoreError::CollaboratorUnavailable),
        }
    }

    async fn generate_image(&self, prompt: String) -> Result<GeneratedImage, CoreError> {
        match self {
            LlmCollaborator::Gemini(client) => client.generate_image(prompt).await,
            LlmCollaborator::Disabled => Err(CoreError::CollaboratorUnavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: Option<&str>) -> LLMConfig {
        LLMConfig {
            gemini_api_key: key.map(str::to_string),
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_image_model: "gemini-2.0-flash-preview-image-generation".to_string(),
        }
    }

    #[test]
    fn test_from_config_without_key_is_disabled() {
        assert!(!LlmCollaborator::from_config(&config(None)).is_enabled());
        assert!(!LlmCollaborator::from_config(&config(Some("  "))).is_enabled());
        assert!(LlmCollaborator::from_config(&config(Some("key"))).is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_collaborator_is_unavailable() {
        let llm = LlmCollaborator::Disabled;

        let result = llm
            .generate_with_text("prompt".to_string(), serde_json::json!({}))
            .await;

        assert!(matches!(result, Err(CoreError::CollaboratorUnavailable)));
        assert!(matches!(
            llm.generate_image("prompt".to_string()).await,
            Err(CoreError::CollaboratorUnavailable)
        ));
    }
}
