// Route path constants - single source of truth for all site and API paths

// Site pages
pub const LANDING_PAGE: &str = "/";
pub const GET_STARTED: &str = "/get_started";
pub const PROTOCOL_OVERVIEW: &str = "/protocol/Overview";
pub const NOISE_K: &str = "/protocol/Noise_K";
pub const NOISE_N: &str = "/protocol/Noise_N";
pub const NOISE_X: &str = "/protocol/Noise_X";
pub const NOISE_NNPSK2: &str = "/protocol/Noise_NNpsk2";
pub const NOISE_KK: &str = "/protocol/Noise_KK";
pub const NOISE_NK: &str = "/protocol/Noise_NK";
pub const NOISE_NX: &str = "/protocol/Noise_NX";
pub const NOISE_KX: &str = "/protocol/Noise_KX";
pub const NOISE_XK: &str = "/protocol/Noise_XK";
pub const NOISE_XX: &str = "/protocol/Noise_XX";
pub const NOISE_NNOOB: &str = "/protocol/Noise_NNoob";
pub const LIBRARY_OVERVIEW: &str = "/library/Overview";

// JSON API
pub const HEALTH: &str = "/health";
pub const API_ROUTES: &str = "/api/routes";
pub const API_ROUTE_BY_NAME: &str = "/api/routes/{name}";
pub const API_RESOLVE: &str = "/api/resolve";

// OpenAPI
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
