use axum::extract::{Multipart, State};
use boardsmith_core::domain::{
    collaborators::PlateVerdict,
    plating::{JudgePlateInput, PlatingService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub const MAX_PHOTO_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct JudgePlateResponse {
    pub data: PlateVerdict,
}

/// Multipart form accepted by the judge.
#[derive(Debug, ToSchema)]
pub struct JudgePlateForm {
    #[schema(value_type = String, format = Binary)]
    pub photo: Vec<u8>,
    pub dinner_name: String,
    pub ingredients: String,
    /// Repeat the field or separate names with commas.
    pub rules_applied: Option<String>,
}

#[utoipa::path(
    post,
    path = "/judge",
    tag = "plating",
    summary = "Judge a photo of a plated board",
    description = "Scores the photo with the vision collaborator. Scores never fall below the configured floor",
    request_body(content = JudgePlateForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = JudgePlateResponse),
        (status = 400, description = "Missing or oversized form fields"),
        (status = 503, description = "No vision collaborator is available"),
    ),
)]
pub async fn judge_plate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<JudgePlateResponse>, ApiError> {
    let mut photo: Option<Vec<u8>> = None;
    let mut dinner_name: Option<String> = None;
    let mut ingredients: Option<String> = None;
    let mut rules_applied: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "photo" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read photo: {}", e)))?;

                if data.len() > MAX_PHOTO_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Photo too large. Max size is {} bytes",
                        MAX_PHOTO_SIZE
                    )));
                }

                photo = Some(data.to_vec());
            }
            "dinner_name" => {
                dinner_name = Some(read_text(field, "dinner_name").await?);
            }
            "ingredients" => {
                ingredients = Some(read_text(field, "ingredients").await?);
            }
            "rules_applied" => {
                let value = read_text(field, "rules_applied").await?;
                rules_applied.extend(split_rules(&value));
            }
            _ => {}
        }
    }

    let photo = photo.ok_or_else(|| ApiError::BadRequest("Missing photo field".to_string()))?;
    let dinner_name = dinner_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing dinner_name field".to_string()))?;
    let ingredients =
        ingredients.ok_or_else(|| ApiError::BadRequest("Missing ingredients field".to_string()))?;

    let verdict = state
        .service
        .judge_plate(JudgePlateInput {
            photo,
            dinner_name,
            ingredients,
            rules_applied,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(JudgePlateResponse { data: verdict }))
}

async fn read_text(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read {}: {}", name, e)))
}

fn split_rules(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|rule| !rule.is_empty())
        .map(str::to_string)
}
