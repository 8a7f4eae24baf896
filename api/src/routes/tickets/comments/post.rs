use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::comment_service::CommentService;
use util::state::AppState;

use crate::response::{ApiResponse, bad_body, service_error};
use crate::routes::tickets::comments::common::{CommentRequest, CommentResponse};

/// POST /api/tickets/{ticket_id}/comments
///
/// ### Request Body
/// ```json
/// { "comment": "Replaced the power adapter", "author": "helpdesk" }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored comment
/// - `400 Bad Request` when the body is not a JSON object with string `comment` and `author`
/// - `404 Not Found` → `"Ticket not found"`; nothing is stored
pub async fn create_comment(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<String>,
    payload: Result<Json<CommentRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => return bad_body(rejection),
    };

    match CommentService::add(app_state.db(), &ticket_id, &req.comment, &req.author).await {
        Ok(comment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                CommentResponse::from(comment),
                "Comment added successfully",
            )),
        )
            .into_response(),
        Err(err) => service_error(err),
    }
}
