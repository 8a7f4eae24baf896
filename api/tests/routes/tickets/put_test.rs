#[cfg(test)]
mod tests {
    use super::super::{create_ticket, ticket_body};
    use crate::helpers::{json_request, make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn update_status_test() {
        let (app, _) = make_test_app().await;
        let ticket_id = create_ticket(&app, ticket_body("ATS0123", "a@gmail.com")).await;

        let (status, json) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/tickets/{ticket_id}/status"),
                Some(json!({ "status": "Resolved" })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Ticket status updated successfully");
        assert_eq!(json["data"]["status"], "Resolved");
        assert_eq!(json["data"]["ticket_id"], ticket_id);

        let (_, fetched) = send(
            &app,
            json_request("GET", &format!("/api/tickets/{ticket_id}"), None),
        )
        .await;
        assert_eq!(fetched["data"]["status"], "Resolved");
    }

    #[tokio::test]
    async fn closed_ticket_can_be_reopened_test() {
        let (app, _) = make_test_app().await;
        let ticket_id = create_ticket(&app, ticket_body("ATS0123", "a@gmail.com")).await;
        let uri = format!("/api/tickets/{ticket_id}/status");

        for next in ["Closed", "Open"] {
            let (status, json) = send(
                &app,
                json_request("PUT", &uri, Some(json!({ "status": next }))),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["data"]["status"], next);
        }
    }

    #[tokio::test]
    async fn invalid_status_leaves_ticket_unchanged_test() {
        let (app, _) = make_test_app().await;
        let ticket_id = create_ticket(&app, ticket_body("ATS0123", "a@gmail.com")).await;

        let (status, json) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/tickets/{ticket_id}/status"),
                Some(json!({ "status": "Bogus" })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid status");

        let (_, fetched) = send(
            &app,
            json_request("GET", &format!("/api/tickets/{ticket_id}"), None),
        )
        .await;
        assert_eq!(fetched["data"]["status"], "Open");
        assert_eq!(fetched["data"]["updated_at"], fetched["data"]["created_at"]);
    }

    #[tokio::test]
    async fn missing_or_non_string_status_is_invalid_test() {
        let (app, _) = make_test_app().await;
        let ticket_id = create_ticket(&app, ticket_body("ATS0123", "a@gmail.com")).await;
        let uri = format!("/api/tickets/{ticket_id}/status");

        for body in [json!({}), json!({ "status": 5 }), json!({ "status": null })] {
            let (status, json) = send(&app, json_request("PUT", &uri, Some(body.clone()))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json["success"], false);
            assert_eq!(json["message"], "Invalid status", "{body}");
        }

        let (_, fetched) = send(
            &app,
            json_request("GET", &format!("/api/tickets/{ticket_id}"), None),
        )
        .await;
        assert_eq!(fetched["data"]["status"], "Open");
    }

    #[tokio::test]
    async fn update_status_of_missing_ticket_test() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(
            &app,
            json_request(
                "PUT",
                "/api/tickets/TKT-999999/status",
                Some(json!({ "status": "Closed" })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Ticket not found");
    }
}
