use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::ticket_service::TicketService;
use util::state::AppState;

use crate::response::{ApiResponse, bad_body, service_error};
use crate::routes::tickets::common::{TicketRequest, TicketResponse};

/// POST /api/tickets
///
/// Submit a new support ticket.
///
/// ### Request Body
/// ```json
/// {
///   "emp_id": "ATS0123",
///   "emp_name": "Asha Rao",
///   "emp_email": "asha@gmail.com",
///   "department": "IT",
///   "priority": "High",
///   "issue_type": "Hardware",
///   "description": "Laptop will not boot"
/// }
/// ```
///
/// ### Validation Rules (checked in order, first failure wins)
/// * `emp_id`: `ATS0` followed by three digits, never `ATS0000`
/// * `emp_email`: must end in `@gmail.com`, `@outlook.com`, `@<label>.in` or `@<label>.org.co`
/// * every other field: present and non-empty
///
/// Absent fields read as empty, so a bad `emp_id` is reported even when other fields
/// are missing.
///
/// ### Responses
/// - `201 Created` with the stored ticket (`ticket_id` like `TKT-482913`, `status` = `Open`)
/// - `400 Bad Request` → `"Invalid Employee ID format"`, `"Invalid email domain"`,
///   `"Missing required field: <name>"`, or the reason an unreadable body was rejected
/// - `500 Internal Server Error` → `"Server error"`
pub async fn create_ticket(
    State(app_state): State<AppState>,
    payload: Result<Json<TicketRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => return bad_body(rejection),
    };

    match TicketService::create(app_state.db(), req.into()).await {
        Ok(ticket) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                TicketResponse::from(ticket),
                "Ticket created successfully",
            )),
        )
            .into_response(),
        Err(err) => service_error(err),
    }
}
