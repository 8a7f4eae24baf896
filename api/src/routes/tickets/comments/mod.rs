//! Comment routes nested under `/tickets/{ticket_id}/comments`.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::get_comments;
use post::create_comment;

/// Routes:
/// - `POST /tickets/{ticket_id}/comments` → Attach a comment
/// - `GET  /tickets/{ticket_id}/comments` → List comments, oldest first
pub fn comment_routes() -> Router<AppState> {
    Router::new().route("/", get(get_comments).post(create_comment))
}
