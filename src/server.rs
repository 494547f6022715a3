//! HTTP application assembly.
//!
//! Shared by the binary and the integration tests so both serve exactly the
//! same middleware stack.

use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;

/// Builds the router with tracing, CORS and request timeout layers.
///
/// With the `swagger-ui` feature the interactive docs are served at
/// `/swagger-ui`.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    let router = api::build_router();

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/swagger-ui/openapi.json", api::ApiDoc::openapi()),
        )
    };

    router
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::ConsoleStore;

    fn app() -> Router {
        build_app(
            AppState::new(Arc::new(ConsoleStore::new())),
            Duration::from_secs(5),
        )
    }

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("request should build");
        };
        let Ok(response) = app().oneshot(request).await else {
            panic!("router is infallible");
        };
        let status = response.status();
        let Ok(bytes) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body should be readable");
        };
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn catalogs_list_currencies() {
        let (status, body) = get("/config/catalogs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currencies"][0]["code"], "BS");
    }

    #[tokio::test]
    async fn missing_schedule_is_not_found() {
        let (status, body) = get("/api/v1/events/1/schedule").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], 2002);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (status, body) = get("/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/v1/meetings/negotiable"].is_object());
    }
}
