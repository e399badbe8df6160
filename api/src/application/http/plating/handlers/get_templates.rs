use axum::extract::State;
use boardsmith_core::domain::{plating::PlatingService, template::Template};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct GetTemplatesResponse {
    pub data: Vec<Template>,
}

#[utoipa::path(
    get,
    path = "/templates",
    tag = "plating",
    summary = "List board templates",
    description = "All board templates in selection priority order",
    responses(
        (status = 200, body = GetTemplatesResponse)
    ),
)]
pub async fn get_templates(
    State(state): State<AppState>,
) -> Result<Response<GetTemplatesResponse>, ApiError> {
    let templates = state.service.templates().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetTemplatesResponse { data: templates }))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::application::http::server::http_server::tests::test_server;

    #[tokio::test]
    async fn test_get_templates_in_priority_order() {
        let response = test_server().get("/plating/templates").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let templates = body["data"].as_array().unwrap();
        assert_eq!(templates.len(), 7);
        assert_eq!(templates[0]["id"], "minimalist");
        assert_eq!(templates[6]["id"], "casual");
    }
}
