use axum::extract::State;
use boardsmith_core::domain::{
    dinner::DinnerMatch,
    plating::{PlatingService, SuggestDinnerInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    dinner::validators::SuggestDinnerRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SuggestDinnerResponse {
    pub data: DinnerMatch,
}

#[utoipa::path(
    post,
    path = "",
    tag = "dinner",
    summary = "Name tonight's board",
    description = "Suggests a dinner name, an affirmation and a plating tip. Uses the curated table when no writer is available",
    request_body = SuggestDinnerRequest,
    responses(
        (status = 200, body = SuggestDinnerResponse)
    ),
)]
pub async fn suggest_dinner(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestDinnerRequest>,
) -> Result<Response<SuggestDinnerResponse>, ApiError> {
    let dinner = state
        .service
        .suggest_dinner(SuggestDinnerInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SuggestDinnerResponse { data: dinner }))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::application::http::server::http_server::tests::test_server;

    #[tokio::test]
    async fn test_suggest_dinner_from_curated_table() {
        let response = test_server()
            .post("/dinner")
            .json(&json!({ "ingredients": "Honey\nBrie" }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["data"]["name"], "Golden Hour");
        assert_eq!(body["data"]["source"], "exact");
    }

    #[tokio::test]
    async fn test_suggest_dinner_unknown_items_get_default() {
        let response = test_server()
            .post("/dinner")
            .json(&json!({ "ingredients": "xyzzy, plugh" }))
            .await;

        let body = response.json::<Value>();
        assert_eq!(body["data"]["name"], "The Spread");
        assert_eq!(body["data"]["source"], "default");
    }
}
