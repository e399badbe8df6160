use super::handlers::{
    get_templates::{__path_get_templates, get_templates},
    illustrate_plate::{__path_illustrate_plate, illustrate_plate},
    judge_plate::{__path_judge_plate, MAX_PHOTO_SIZE, judge_plate},
    plate::{__path_plate, plate},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

/// Room for the text fields and multipart boundaries around the photo.
const JUDGE_FORM_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(plate, illustrate_plate, judge_plate, get_templates))]
pub struct PlatingApiDoc;

pub fn plating_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/plating", state.args.server.root_path),
            post(plate),
        )
        .route(
            &format!("{}/plating/illustration", state.args.server.root_path),
            post(illustrate_plate),
        )
        .route(
            &format!("{}/plating/judge", state.args.server.root_path),
            post(judge_plate).layer(DefaultBodyLimit::max(MAX_PHOTO_SIZE + JUDGE_FORM_OVERHEAD)),
        )
        .route(
            &format!("{}/plating/templates", state.args.server.root_path),
            get(get_templates),
        )
}
