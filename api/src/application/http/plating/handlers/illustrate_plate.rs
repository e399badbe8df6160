use axum::extract::State;
use boardsmith_core::domain::plating::{IllustratePlateInput, PlateIllustration, PlatingService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    plating::validators::IllustratePlateRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct IllustratePlateResponse {
    pub data: PlateIllustration,
}

#[utoipa::path(
    post,
    path = "/illustration",
    tag = "plating",
    summary = "Illustrate a plated board",
    description = "Plates the ingredients and renders the image prompt. Falls back to an SVG placeholder when image generation is unavailable",
    request_body = IllustratePlateRequest,
    responses(
        (status = 200, body = IllustratePlateResponse),
        (status = 400, description = "Nothing on the list can be plated"),
    ),
)]
pub async fn illustrate_plate(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<IllustratePlateRequest>,
) -> Result<Response<IllustratePlateResponse>, ApiError> {
    let illustration = state
        .service
        .illustrate_plate(IllustratePlateInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(IllustratePlateResponse { data: illustration }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::application::http::server::http_server::tests::test_server;

    #[tokio::test]
    async fn test_illustrate_without_collaborator_uses_placeholder() {
        let response = test_server()
            .post("/plating/illustration")
            .json(&json!({ "ingredients": "hummus, pita, olives" }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["data"]["template"], "mediterranean");
        assert_eq!(body["data"]["illustration"]["kind"], "placeholder");
        assert!(
            body["data"]["illustration"]["svg"]
                .as_str()
                .unwrap()
                .starts_with("<svg")
        );
    }

    #[tokio::test]
    async fn test_illustrate_garbage_is_bad_request() {
        let response = test_server()
            .post("/plating/illustration")
            .json(&json!({ "ingredients": "phone" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["message"],
            "Your phone is not a cracker, no matter how flat it is."
        );
    }
}
