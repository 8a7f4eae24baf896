use db::models::comments::Model as Comment;
use sea_orm::{DatabaseConnection, SqlErr};
use tracing::info;

use crate::error::{ServiceError, ServiceResult};

pub struct CommentService;

impl CommentService {
    /// Attaches a comment to an existing ticket.
    ///
    /// There is no separate existence lookup: the insert itself is rejected by the
    /// foreign key when the ticket is missing, and that rejection becomes `NotFound`.
    pub async fn add(
        db: &DatabaseConnection,
        ticket_id: &str,
        comment: &str,
        author: &str,
    ) -> ServiceResult<Comment> {
        match Comment::create(db, ticket_id, comment, author).await {
            Ok(created) => {
                info!(%ticket_id, comment_id = created.id, "Comment added");
                Ok(created)
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => Err(ServiceError::NotFound),
                _ => Err(err.into()),
            },
        }
    }

    /// Comments on `ticket_id`, oldest first. Unknown tickets yield an empty list.
    pub async fn list(db: &DatabaseConnection, ticket_id: &str) -> ServiceResult<Vec<Comment>> {
        Ok(Comment::find_all_for_ticket(db, ticket_id).await?)
    }
}
