use crate::error::{ApiError, ErrorResponse};
use crate::models::{ResolveQuery, RouteResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// GET /api/resolve handler - Resolve a URL path to its route
///
/// Matching is exact: no prefix matching, no trailing slash folding.
#[utoipa::path(
    get,
    path = routes::API_RESOLVE,
    params(ResolveQuery),
    responses(
        (status = 200, description = "Route found", body = RouteResponse),
        (status = 400, description = "Missing path query parameter"),
        (status = 404, description = "No route matches the path", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn resolve_handler(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<(StatusCode, Json<RouteResponse>), ApiError> {
    let route = state.routes.resolve(&query.path).inspect_err(|e| {
        tracing::debug!("Resolution failed: {}", e);
    })?;

    Ok((StatusCode::OK, Json(RouteResponse::from(route))))
}
