use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    collaborators::{GeneratedImage, LLMClient},
    common::entities::app_errors::CoreError,
};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    image_model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Default, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
}

impl GenerationConfig {
    fn json(response_schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(response_schema),
            ..Default::default()
        }
    }

    fn image() -> Self {
        Self {
            response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default, alias = "inline_data")]
    inline_data: Option<InlineDataResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataResponse {
    #[serde(alias = "mime_type")]
    mime_type: String,
    data: String,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, image_model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            image_model_name,
            client: Client::new(),
        }
    }

    async fn call_gemini_api(
        &self,
        model_name: &str,
        request: GeminiRequest,
    ) -> Result<Vec<PartResponse>, CoreError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_BASE_URL, model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }

    async fn call_for_text(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let parts = self.call_gemini_api(&self.model_name, request).await?;

        first_text(parts)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

fn first_text(parts: Vec<PartResponse>) -> Option<String> {
    parts.into_iter().find_map(|p| p.text)
}

fn first_image(parts: Vec<PartResponse>) -> Result<GeneratedImage, CoreError> {
    let inline = parts
        .into_iter()
        .find_map(|p| p.inline_data)
        .ok_or_else(|| CoreError::ExternalServiceError("No image in LLM response".to_string()))?;

    let data = general_purpose::STANDARD.decode(&inline.data).map_err(|e| {
        tracing::error!("Failed to decode generated image: {}", e);
        CoreError::ExternalServiceError(format!("Invalid image data: {}", e))
    })?;

    Ok(GeneratedImage {
        mime_type: inline.mime_type,
        data,
    })
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: base64_image,
                        },
                    },
                ],
            }],
            generation_config: Some(GenerationConfig::json(response_schema)),
        };

        self.call_for_text(request).await
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            generation_config: Some(GenerationConfig::json(response_schema)),
        };

        self.call_for_text(request).await
    }

    async fn generate_image(&self, prompt: String) -> Result<GeneratedImage, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            generation_config: Some(GenerationConfig::image()),
        };

        let parts = self
            .call_gemini_api(&self.image_model_name, request)
            .await?;

        first_image(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_generation_config() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig::image()),
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            value["generation_config"]["response_modalities"],
            serde_json::json!(["TEXT", "IMAGE"])
        );
        assert!(value["generation_config"].get("response_schema").is_none());
    }

    #[test]
    fn test_response_image_part_is_decoded() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your board." },
                        { "inlineData": { "mimeType": "image/png", "data": "AQID" } }
                    ]
                }
            }]
        }"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        let parts = response.candidates.into_iter().next().unwrap().content.parts;

        let image = first_image(parts).unwrap();

        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_response_without_image_is_an_error() {
        let parts = vec![PartResponse {
            text: Some("sorry".to_string()),
            inline_data: None,
        }];

        assert!(matches!(
            first_image(parts),
            Err(CoreError::ExternalServiceError(_))
        ));
    }
}
