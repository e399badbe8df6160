use std::future::Future;

use crate::domain::{collaborators::entities::GeneratedImage, common::entities::app_errors::CoreError};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Vision call: one image plus instructions, answered as JSON matching
    /// `response_schema`.
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_image(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<GeneratedImage, CoreError>> + Send;
}
