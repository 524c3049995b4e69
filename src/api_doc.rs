use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{RouteListResponse, RouteResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "disco-site API",
        version = "1.0.0",
        description = "Route table of the Disco protocol documentation site"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::lookup::lookup_handler,
        handlers::resolve::resolve_handler
    ),
    components(
        schemas(
            RouteResponse,
            RouteListResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "routes", description = "Route resolution and reverse lookup")
    )
)]
pub struct ApiDoc;
