use axum::extract::State;
use boardsmith_core::domain::plating::{PlateInput, PlatingOutcome, PlatingService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    plating::validators::PlateRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

/// Every outcome is answered with 200; `success` tells a plated board apart
/// from a rejection.
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PlateResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: PlatingOutcome,
}

impl From<PlatingOutcome> for PlateResponse {
    fn from(outcome: PlatingOutcome) -> Self {
        Self {
            success: outcome.is_success(),
            outcome,
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "plating",
    summary = "Plate a list of ingredients",
    description = "Validates and classifies the ingredients, picks a board template and builds the image prompt",
    request_body = PlateRequest,
    responses(
        (status = 200, body = PlateResponse),
        (status = 422, description = "Ingredient text is empty or too long"),
    ),
)]
pub async fn plate(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PlateRequest>,
) -> Result<Response<PlateResponse>, ApiError> {
    let outcome = state
        .service
        .plate(PlateInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PlateResponse::from(outcome)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::application::http::server::http_server::tests::test_server;

    #[tokio::test]
    async fn test_plate_returns_plated_board() {
        let response = test_server()
            .post("/plating")
            .json(&json!({ "ingredients": "brie, crackers, grapes" }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["type"], "plated");
        assert_eq!(body["template"], "minimalist");
        assert!(body["prompt"].as_str().unwrap().contains("Brie"));
    }

    #[tokio::test]
    async fn test_plate_reports_garbage_as_data() {
        let response = test_server()
            .post("/plating")
            .json(&json!({ "ingredients": "phone, keys" }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert_eq!(body["type"], "all_garbage");
        assert_eq!(body["rejected_items"], json!(["phone", "keys"]));
    }

    #[tokio::test]
    async fn test_plate_separators_only_is_empty() {
        let response = test_server()
            .post("/plating")
            .json(&json!({ "ingredients": " , \n" }))
            .await;

        let body = response.json::<Value>();
        assert_eq!(body["type"], "empty");
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_plate_rejects_blank_body() {
        let response = test_server()
            .post("/plating")
            .json(&json!({ "ingredients": "" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["code"], "E_VALIDATION");
    }

    #[tokio::test]
    async fn test_plate_rejects_malformed_json() {
        let response = test_server()
            .post("/plating")
            .json(&json!({ "items": ["brie"] }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}
