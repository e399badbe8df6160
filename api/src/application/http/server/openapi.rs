use crate::application::http::{
    dinner::router::DinnerApiDoc, health::router::HealthApiDoc, plating::router::PlatingApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Boardsmith API"
    ),
    nest(
        (path = "/plating", api = PlatingApiDoc),
        (path = "/dinner", api = DinnerApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
