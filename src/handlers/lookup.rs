use crate::error::{ApiError, ErrorResponse};
use crate::models::RouteResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /api/routes/{name} handler - Reverse lookup by route name
#[utoipa::path(
    get,
    path = routes::API_ROUTE_BY_NAME,
    params(
        ("name" = String, Path, description = "Symbolic route name, e.g. Noise_XX")
    ),
    responses(
        (status = 200, description = "Route found", body = RouteResponse),
        (status = 404, description = "No route with that name", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn lookup_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<RouteResponse>), ApiError> {
    let route = state.routes.route_by_name(&name).inspect_err(|e| {
        tracing::debug!("Reverse lookup failed: {}", e);
    })?;

    Ok((StatusCode::OK, Json(RouteResponse::from(route))))
}
