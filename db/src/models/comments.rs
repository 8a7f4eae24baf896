use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue::Set, QueryOrder, entity::prelude::*};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub ticket_id: String,

    pub comment: String,
    pub author: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tickets::Entity",
        from = "Column::TicketId",
        to = "super::tickets::Column::TicketId",
        on_delete = "Cascade"
    )]
    Ticket,
}

impl Related<super::tickets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a comment. The foreign key on `ticket_id` rejects comments for
    /// tickets that do not exist.
    pub async fn create(
        db: &DbConn,
        ticket_id: &str,
        comment: &str,
        author: &str,
    ) -> Result<Model, DbErr> {
        let active = ActiveModel {
            ticket_id: Set(ticket_id.to_owned()),
            comment: Set(comment.to_owned()),
            author: Set(author.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        active.insert(db).await
    }

    /// Oldest first. An unknown `ticket_id` simply yields no rows.
    pub async fn find_all_for_ticket(db: &DbConn, ticket_id: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::TicketId.eq(ticket_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }
}
