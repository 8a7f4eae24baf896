//! Ticket routes module.
//!
//! Provides the `/tickets` route group: creation, filtered listing, lookup,
//! status changes, status statistics and nested comment routes.

use axum::{
    Router,
    routing::{get, put},
};
use util::state::AppState;

pub mod comments;
pub mod common;
pub mod get;
pub mod post;
pub mod put;

use comments::comment_routes;
use get::{get_ticket, get_ticket_stats, get_tickets};
use post::create_ticket;
use put::update_ticket_status;

/// Builds the `/tickets` route group.
///
/// Routes:
/// - `POST /tickets`                     → Create a ticket
/// - `GET  /tickets`                     → List tickets (optional filters)
/// - `GET  /tickets/stats`               → Count tickets per status
/// - `GET  /tickets/{ticket_id}`         → Get one ticket
/// - `PUT  /tickets/{ticket_id}/status`  → Change a ticket's status
///
/// Nested routes:
/// - `/{ticket_id}/comments` handled by `comment_routes`
///
/// `/stats` is a static segment and always wins over `/{ticket_id}`.
pub fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_tickets).post(create_ticket))
        .route("/stats", get(get_ticket_stats))
        .route("/{ticket_id}", get(get_ticket))
        .route("/{ticket_id}/status", put(update_ticket_status))
        .nest("/{ticket_id}/comments", comment_routes())
}
