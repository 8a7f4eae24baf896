//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Liveness and database reachability
//! - `/tickets` → Ticket lifecycle, statistics and comments
//!
//! None of the routes are guarded; the service has no notion of users.

use axum::Router;
use util::state::AppState;

pub mod health;
pub mod tickets;

use health::health_routes;
use tickets::ticket_routes;

/// Builds the router for every HTTP endpoint, with `AppState` already applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/tickets", ticket_routes())
        .with_state(app_state)
}
