use std::sync::Arc;

use crate::application::http::dinner::router::dinner_routes;
use crate::application::http::health::router::health_routes;
use crate::application::http::plating::router::plating_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use boardsmith_core::{application::create_service, domain::common::BoardsmithConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = BoardsmithConfig::from(args.as_ref().clone());
    let service = create_service(config)?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(plating_routes(state.clone()))
        .merge(dinner_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::OnceLock;

    use axum_test::TestServer;
    use clap::Parser;

    use super::*;

    static ROUTER: OnceLock<Router> = OnceLock::new();

    /// Router with the collaborator disabled. The metrics recorder is
    /// process-global, so the router is built once and cloned per test.
    pub(crate) fn test_server() -> TestServer {
        let router = ROUTER.get_or_init(|| {
            let args = Arc::new(Args::parse_from([
                "boardsmith-api",
                "--gemini-api-key",
                "",
                "--server-allowed-origins",
                "http://localhost:5173",
            ]));
            let service = create_service(BoardsmithConfig::from(args.as_ref().clone())).unwrap();

            router(AppState::new(args, service)).unwrap()
        });

        TestServer::new(router.clone()).unwrap()
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = test_server().get("/api-docs/openapi.json").await;

        response.assert_status_ok();
        let document = response.json::<serde_json::Value>();
        assert!(document["paths"].get("/plating").is_some());
        assert!(document["paths"].get("/dinner").is_some());
    }

    #[tokio::test]
    async fn test_metrics_route_is_exposed() {
        test_server().get("/metrics").await.assert_status_ok();
    }
}
