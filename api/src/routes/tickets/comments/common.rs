use db::models::comments::Model as CommentModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub comment: String,
    pub author: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub ticket_id: String,
    pub comment: String,
    pub author: String,
    pub created_at: String,
}

impl From<CommentModel> for CommentResponse {
    fn from(comment: CommentModel) -> Self {
        Self {
            id: comment.id,
            ticket_id: comment.ticket_id,
            comment: comment.comment,
            author: comment.author,
            created_at: comment.created_at.to_rfc3339(),
        }
    }
}
