use crate::models::{RouteListResponse, RouteResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/routes handler - List every route in table order
#[utoipa::path(
    get,
    path = routes::API_ROUTES,
    responses(
        (status = 200, description = "All registered routes", body = RouteListResponse)
    ),
    tag = "routes"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<RouteListResponse>) {
    let data: Vec<RouteResponse> = state.routes.iter().map(RouteResponse::from).collect();
    let total_count = data.len();

    tracing::debug!("Listing {} routes", total_count);
    (StatusCode::OK, Json(RouteListResponse { data, total_count }))
}
