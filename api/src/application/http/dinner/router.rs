use super::handlers::suggest_dinner::{__path_suggest_dinner, suggest_dinner};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(suggest_dinner))]
pub struct DinnerApiDoc;

pub fn dinner_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/dinner", state.args.server.root_path),
        post(suggest_dinner),
    )
}
