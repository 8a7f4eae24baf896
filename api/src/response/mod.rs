use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use services::ServiceError;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// ```json
/// {
///   "success": true,
///   "data": { "ticket_id": "TKT-482913", "status": "Open" },
///   "message": "Ticket created successfully"
/// }
/// ```
///
/// Error responses carry `"success": false`, a `null` payload and a human-readable message.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

/// Maps a service failure onto its HTTP status and envelope.
///
/// Store failures are logged here and reach the client only as a generic message.
pub fn service_error(err: ServiceError) -> Response {
    let (status, message) = match err {
        ServiceError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
        ServiceError::NotFound => (StatusCode::NOT_FOUND, "Ticket not found".to_string()),
        ServiceError::Store(db_err) => {
            tracing::error!(error = %db_err, "Store failure");
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
        }
    };

    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

/// Maps a body the `Json` extractor could not read onto a 400 envelope.
pub fn bad_body(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(rejection.body_text())),
    )
        .into_response()
}
