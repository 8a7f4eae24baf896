#[cfg(test)]
mod tests {
    use super::super::{create_ticket, ticket_body};
    use crate::helpers::{json_request, make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    fn ticket_ids(json: &Value) -> Vec<String> {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["ticket_id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn get_ticket_test() {
        let (app, _) = make_test_app().await;
        let ticket_id = create_ticket(&app, ticket_body("ATS0123", "a@gmail.com")).await;

        let (status, json) = send(
            &app,
            json_request("GET", &format!("/api/tickets/{ticket_id}"), None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Ticket retrieved successfully");
        assert_eq!(json["data"]["ticket_id"], ticket_id);
        assert_eq!(json["data"]["emp_email"], "a@gmail.com");
    }

    #[tokio::test]
    async fn get_missing_ticket_test() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(&app, json_request("GET", "/api/tickets/TKT-000000", None)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Ticket not found");
    }

    #[tokio::test]
    async fn list_tickets_newest_first_test() {
        let (app, _) = make_test_app().await;
        let first = create_ticket(&app, ticket_body("ATS0001", "a@gmail.com")).await;
        let second = create_ticket(&app, ticket_body("ATS0002", "b@gmail.com")).await;
        let third = create_ticket(&app, ticket_body("ATS0003", "c@gmail.com")).await;

        let (status, json) = send(&app, json_request("GET", "/api/tickets", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Tickets retrieved successfully");
        assert_eq!(ticket_ids(&json), vec![third, second, first]);
    }

    #[tokio::test]
    async fn list_tickets_with_filters_test() {
        let (app, _) = make_test_app().await;
        let mut body = ticket_body("ATS0001", "a@gmail.com");
        body["department"] = json!("HR");
        let hr = create_ticket(&app, body).await;
        let it_one = create_ticket(&app, ticket_body("ATS0001", "a@gmail.com")).await;
        let it_two = create_ticket(&app, ticket_body("ATS0002", "b@gmail.com")).await;

        send(
            &app,
            json_request(
                "PUT",
                &format!("/api/tickets/{it_two}/status"),
                Some(json!({ "status": "In Progress" })),
            ),
        )
        .await;

        let (_, json) = send(
            &app,
            json_request("GET", "/api/tickets?emp_id=ATS0001&department=IT", None),
        )
        .await;
        assert_eq!(ticket_ids(&json), vec![it_one.clone()]);

        let (_, json) = send(&app, json_request("GET", "/api/tickets?emp_id=ATS0001", None)).await;
        assert_eq!(ticket_ids(&json), vec![it_one, hr]);

        let (_, json) = send(
            &app,
            json_request("GET", "/api/tickets?status=In%20Progress", None),
        )
        .await;
        assert_eq!(ticket_ids(&json), vec![it_two]);

        let (status, json) = send(
            &app,
            json_request("GET", "/api/tickets?priority=Urgent", None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], json!([]));
    }

    #[tokio::test]
    async fn empty_filter_values_are_ignored_test() {
        let (app, _) = make_test_app().await;
        create_ticket(&app, ticket_body("ATS0001", "a@gmail.com")).await;
        create_ticket(&app, ticket_body("ATS0002", "b@gmail.com")).await;

        let (_, json) = send(
            &app,
            json_request("GET", "/api/tickets?emp_id=&status=&issue_type=", None),
        )
        .await;

        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }
}
