use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use util::state::AppState;

use crate::response::ApiResponse;

/// Builds the `/health` route group.
///
/// Useful for uptime checks, load balancers, or deployment health monitoring.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Reports whether the API can still reach its database.
///
/// ### Responses
/// - `200 OK` → `{ "success": true, "data": "OK", "message": "Health check passed" }`
/// - `503 Service Unavailable` → `"Database unreachable"`
async fn health_check(State(app_state): State<AppState>) -> Response {
    match app_state.db().ping().await {
        Ok(()) => Json(ApiResponse::success("OK", "Health check passed")).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<()>::error("Database unreachable")),
            )
                .into_response()
        }
    }
}
