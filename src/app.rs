use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Assemble the HTTP application
///
/// API endpoints are registered explicitly; every other request falls
/// through to the site's route table.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::API_ROUTES, get(handlers::list_handler))
        .route(routes::API_ROUTE_BY_NAME, get(handlers::lookup_handler))
        .route(routes::API_RESOLVE, get(handlers::resolve_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(handlers::page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_bytes, test_state};
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn send(uri: &str) -> axum::response::Response {
        build_router(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_site_pages_and_api_share_one_router() {
        assert_eq!(send("/").await.status(), StatusCode::OK);
        assert_eq!(send("/library/Overview").await.status(), StatusCode::OK);
        assert_eq!(send("/health").await.status(), StatusCode::OK);
        assert_eq!(send("/api/routes/GetStarted").await.status(), StatusCode::OK);
        assert_eq!(send("/api/resolve?path=/get_started").await.status(), StatusCode::OK);
        assert_eq!(send("/protocol/Noise_IK").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_lists_api_paths() {
        let response = send(routes::OPENAPI_JSON).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_bytes(response).await;
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for path in [routes::HEALTH, routes::API_ROUTES, routes::API_ROUTE_BY_NAME, routes::API_RESOLVE] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
    }
}
