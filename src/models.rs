use serde::{Deserialize, Serialize};

use crate::router::Route;
use crate::site::View;

/// A single route as exposed by the API
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteResponse {
    pub path: String,
    pub name: String,
    pub view: String,
}

impl From<&Route<View>> for RouteResponse {
    fn from(route: &Route<View>) -> Self {
        RouteResponse {
            path: route.path.clone(),
            name: route.name.clone(),
            view: route.view.id(),
        }
    }
}

/// Response type for the route listing endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteListResponse {
    pub data: Vec<RouteResponse>,
    pub total_count: usize,
}

/// Query parameters for the resolve endpoint
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveQuery {
    /// Requested URL path, matched exactly
    pub path: String,
}
