#[cfg(test)]
mod tests {
    use super::super::{create_ticket, ticket_body};
    use crate::helpers::{json_request, make_test_app, send};
    use axum::http::StatusCode;
    use db::models::comments::Entity as CommentEntity;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::json;

    #[tokio::test]
    async fn add_and_list_comments_test() {
        let (app, _) = make_test_app().await;
        let ticket_id = create_ticket(&app, ticket_body("ATS0123", "a@gmail.com")).await;
        let uri = format!("/api/tickets/{ticket_id}/comments");

        let (status, json) = send(
            &app,
            json_request(
                "POST",
                &uri,
                Some(json!({ "comment": "Looking into it", "author": "Support" })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Comment added successfully");
        assert_eq!(json["data"]["ticket_id"], ticket_id);
        assert_eq!(json["data"]["author"], "Support");

        send(
            &app,
            json_request(
                "POST",
                &uri,
                Some(json!({ "comment": "Replaced the battery", "author": "Support" })),
            ),
        )
        .await;

        let (status, json) = send(&app, json_request("GET", &uri, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Comments retrieved successfully");
        let comments: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["comment"].as_str().unwrap())
            .collect();
        assert_eq!(comments, vec!["Looking into it", "Replaced the battery"]);
    }

    #[tokio::test]
    async fn comment_on_missing_ticket_test() {
        let (app, app_state) = make_test_app().await;

        let (status, json) = send(
            &app,
            json_request(
                "POST",
                "/api/tickets/TKT-000001/comments",
                Some(json!({ "comment": "Hello?", "author": "Support" })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Ticket not found");

        let stored = CommentEntity::find().count(app_state.db()).await.unwrap();
        assert_eq!(stored, 0);
    }

    #[tokio::test]
    async fn comment_without_author_is_bad_request_test() {
        let (app, _) = make_test_app().await;
        let ticket_id = create_ticket(&app, ticket_body("ATS0123", "a@gmail.com")).await;

        let (status, json) = send(
            &app,
            json_request(
                "POST",
                &format!("/api/tickets/{ticket_id}/comments"),
                Some(json!({ "comment": "No author" })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn ticket_without_comments_lists_empty_test() {
        let (app, _) = make_test_app().await;
        let ticket_id = create_ticket(&app, ticket_body("ATS0123", "a@gmail.com")).await;

        let (status, json) = send(
            &app,
            json_request("GET", &format!("/api/tickets/{ticket_id}/comments"), None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], json!([]));
    }

    #[tokio::test]
    async fn comments_of_unknown_ticket_list_empty_test() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(
            &app,
            json_request("GET", "/api/tickets/TKT-424242/comments", None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], json!([]));
    }
}
