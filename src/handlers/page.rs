use crate::state::AppState;
use crate::views;
use axum::{extract::State, http::StatusCode, http::Uri, response::Html};

/// Fallback handler - Render the site page bound to the request path
///
/// Every request not claimed by the API is resolved through the route
/// table. Unmatched paths get the not-found page with a 404 status.
pub async fn page_handler(State(state): State<AppState>, uri: Uri) -> (StatusCode, Html<String>) {
    let path = uri.path();

    match state.routes.resolve(path) {
        Ok(route) => {
            tracing::debug!("Rendering {} for {}", route.name, path);
            (
                StatusCode::OK,
                Html(views::render(route.view, &state.routes, &state.config)),
            )
        }
        Err(e) => {
            tracing::info!("{}", e);
            (
                StatusCode::NOT_FOUND,
                Html(views::render_not_found(path, &state.routes, &state.config)),
            )
        }
    }
}
