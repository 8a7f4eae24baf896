//! Ticket status handler.
//!
//! Any of `Open`, `In Progress`, `Resolved` and `Closed` may be set regardless of the
//! current status, so closed tickets can be reopened.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::ticket_service::TicketService;
use util::state::AppState;

use crate::response::{ApiResponse, bad_body, service_error};
use crate::routes::tickets::common::{StatusRequest, TicketResponse};

/// PUT /api/tickets/{ticket_id}/status
///
/// ### Request Body
/// ```json
/// { "status": "In Progress" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated ticket; `updated_at` is refreshed
/// - `400 Bad Request` → `"Invalid status"` for a missing, non-string or unknown status
///   (the stored ticket is left untouched)
/// - `404 Not Found` → `"Ticket not found"`
pub async fn update_ticket_status(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<String>,
    payload: Result<Json<StatusRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => return bad_body(rejection),
    };

    match TicketService::update_status(app_state.db(), &ticket_id, req.status()).await {
        Ok(ticket) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                TicketResponse::from(ticket),
                "Ticket status updated successfully",
            )),
        )
            .into_response(),
        Err(err) => service_error(err),
    }
}
