use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::comment_service::CommentService;
use util::state::AppState;

use crate::response::{ApiResponse, service_error};
use crate::routes::tickets::comments::common::CommentResponse;

/// GET /api/tickets/{ticket_id}/comments
///
/// Oldest first. An unknown ticket is not an error here: the list is just empty.
pub async fn get_comments(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> Response {
    match CommentService::list(app_state.db(), &ticket_id).await {
        Ok(comments) => {
            let comments: Vec<CommentResponse> =
                comments.into_iter().map(CommentResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(comments, "Comments retrieved successfully")),
            )
                .into_response()
        }
        Err(err) => service_error(err),
    }
}
