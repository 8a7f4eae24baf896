use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::filters::TicketFilter;
use services::ticket_service::{TicketService, TicketStats};
use util::state::AppState;

use crate::response::{ApiResponse, service_error};
use crate::routes::tickets::common::{FilterReq, TicketResponse};

/// GET /api/tickets
///
/// Lists tickets, newest first. Optional exact-match query parameters:
/// `emp_id`, `status`, `priority`, `department`, `issue_type`. All given parameters
/// must match; a filter that matches nothing yields an empty list.
pub async fn get_tickets(
    State(app_state): State<AppState>,
    Query(params): Query<FilterReq>,
) -> Response {
    let filter = TicketFilter::from(params);

    match TicketService::list(app_state.db(), &filter).await {
        Ok(tickets) => {
            let tickets: Vec<TicketResponse> =
                tickets.into_iter().map(TicketResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(tickets, "Tickets retrieved successfully")),
            )
                .into_response()
        }
        Err(err) => service_error(err),
    }
}

/// GET /api/tickets/{ticket_id}
///
/// The id is matched exactly; no format check is applied.
///
/// ### Responses
/// - `200 OK` with the ticket
/// - `404 Not Found` → `"Ticket not found"`
pub async fn get_ticket(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> Response {
    match TicketService::get(app_state.db(), &ticket_id).await {
        Ok(ticket) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                TicketResponse::from(ticket),
                "Ticket retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => service_error(err),
    }
}

/// GET /api/tickets/stats
///
/// Ticket count per status. All four statuses are always present.
///
/// ```json
/// {
///   "success": true,
///   "data": { "Open": 3, "In Progress": 1, "Resolved": 0, "Closed": 2 },
///   "message": "Ticket statistics retrieved successfully"
/// }
/// ```
pub async fn get_ticket_stats(State(app_state): State<AppState>) -> Response {
    match TicketService::stats(app_state.db()).await {
        Ok(stats) => (
            StatusCode::OK,
            Json(ApiResponse::<TicketStats>::success(
                stats,
                "Ticket statistics retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => service_error(err),
    }
}
