use std::sync::Arc;

use tracing::info;

use crate::{
    domain::{
        common::{BoardsmithConfig, entities::app_errors::CoreError, services::Service},
        taxonomy::Taxonomy,
    },
    infrastructure::{llm::LlmCollaborator, random::ThreadRandom},
};

pub type BoardsmithService = Service<LlmCollaborator, ThreadRandom>;

/// Loads the taxonomy and wires the configured adapters into the service.
/// Fails when the built-in taxonomy is malformed.
pub fn create_service(config: BoardsmithConfig) -> Result<BoardsmithService, CoreError> {
    let taxonomy = Arc::new(Taxonomy::load()?);
    let llm_client = LlmCollaborator::from_config(&config.llm);

    info!(
        llm_enabled = llm_client.is_enabled(),
        max_items = config.plating.max_items,
        "boardsmith service ready"
    );

    Ok(Service::new(taxonomy, config.plating, llm_client, ThreadRandom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{LLMConfig, PlatingConfig},
        plating::{PlateInput, PlatingService},
    };

    #[tokio::test]
    async fn test_create_service_without_llm_key() {
        let service = create_service(BoardsmithConfig {
            llm: LLMConfig {
                gemini_api_key: None,
                gemini_model: "gemini-2.5-flash".to_string(),
                gemini_image_model: "gemini-2.0-flash-preview-image-generation".to_string(),
            },
            plating: PlatingConfig::default(),
        })
        .unwrap();

        let outcome = service
            .plate(PlateInput {
                ingredients: "brie, crackers, grapes".to_string(),
            })
            .await
            .unwrap();

        assert!(outcome.is_success());
    }
}
