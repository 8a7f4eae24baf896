mod comments_test;
mod get_test;
mod put_test;

use axum::Router;
use serde_json::{Value, json};

use crate::helpers::{json_request, send};

pub fn ticket_body(emp_id: &str, emp_email: &str) -> Value {
    json!({
        "emp_id": emp_id,
        "emp_name": "Asha Rao",
        "emp_email": emp_email,
        "department": "IT",
        "priority": "High",
        "issue_type": "Hardware",
        "description": "Laptop will not boot"
    })
}

/// Creates a ticket through the API and returns its `ticket_id`.
pub async fn create_ticket(app: &Router, body: Value) -> String {
    let (status, json) = send(app, json_request("POST", "/api/tickets", Some(body))).await;
    assert_eq!(status, axum::http::StatusCode::CREATED, "{json}");
    json["data"]["ticket_id"].as_str().unwrap().to_string()
}
