pub mod middleware;
pub mod response;
pub mod routes;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    middleware::from_fn,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use util::state::AppState;

use crate::middleware::log_request;
use crate::routes::routes;

/// CORS policy for the given allow-list. An empty list allows any origin.
///
/// Entries that are not valid header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::very_permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE])
}

/// The complete application: `/api` routes wrapped in request logging and CORS.
pub fn app(app_state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .nest("/api", routes(app_state))
        .layer(from_fn(log_request))
        .layer(cors_layer(cors_origins))
}
