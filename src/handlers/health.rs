use crate::error::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The route table is built before the server starts listening, so a
/// running service always reports healthy along with its route count.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            routes: state.routes.len(),
        }),
    )
}
