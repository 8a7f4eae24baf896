use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, QuerySelect};
use strum::{Display, EnumString};

use crate::filters::TicketFilter;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub ticket_id: String,

    pub emp_id: String,
    pub emp_name: String,
    pub emp_email: String,
    pub department: String,
    pub priority: String,
    pub issue_type: String,
    pub description: String,

    pub status: TicketStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle state of a ticket. Any state may move to any other, `Closed` included.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum TicketStatus {
    #[sea_orm(string_value = "Open")]
    #[strum(serialize = "Open")]
    Open,

    #[sea_orm(string_value = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,

    #[sea_orm(string_value = "Resolved")]
    #[strum(serialize = "Resolved")]
    Resolved,

    #[sea_orm(string_value = "Closed")]
    #[strum(serialize = "Closed")]
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a new ticket row. Validation happens before this is built.
#[derive(Debug, Clone)]
pub struct NewTicket<'a> {
    pub ticket_id: &'a str,
    pub emp_id: &'a str,
    pub emp_name: &'a str,
    pub emp_email: &'a str,
    pub department: &'a str,
    pub priority: &'a str,
    pub issue_type: &'a str,
    pub description: &'a str,
}

impl Model {
    /// Inserts a ticket in the `Open` state with both timestamps set to now.
    ///
    /// A duplicate `ticket_id` surfaces as a unique-constraint `DbErr`.
    pub async fn create(db: &DbConn, new: NewTicket<'_>) -> Result<Model, DbErr> {
        let now = Utc::now();

        let active_model = ActiveModel {
            ticket_id: Set(new.ticket_id.to_owned()),
            emp_id: Set(new.emp_id.to_owned()),
            emp_name: Set(new.emp_name.to_owned()),
            emp_email: Set(new.emp_email.to_owned()),
            department: Set(new.department.to_owned()),
            priority: Set(new.priority.to_owned()),
            issue_type: Set(new.issue_type.to_owned()),
            description: Set(new.description.to_owned()),
            status: Set(TicketStatus::Open),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    pub async fn find_by_ticket_id(db: &DbConn, ticket_id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::TicketId.eq(ticket_id))
            .one(db)
            .await
    }

    /// Lists tickets matching every constraint in `filter`, newest first.
    pub async fn find_filtered(db: &DbConn, filter: &TicketFilter) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(filter.condition())
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    /// Sets `status` and refreshes `updated_at` in a single `UPDATE`, then reads the row back.
    ///
    /// Returns `None` when no ticket has the given `ticket_id`.
    pub async fn set_status(
        db: &DbConn,
        ticket_id: &str,
        status: TicketStatus,
    ) -> Result<Option<Model>, DbErr> {
        let result = Entity::update_many()
            .col_expr(Column::Status, Expr::value(status.to_value()))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::TicketId.eq(ticket_id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Self::find_by_ticket_id(db, ticket_id).await
    }

    /// Row count per stored status value. Statuses without tickets are absent.
    pub async fn count_by_status(db: &DbConn) -> Result<Vec<(String, i64)>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::Status)
            .column_as(Column::Id.count(), "count")
            .group_by(Column::Status)
            .into_tuple::<(String, i64)>()
            .all(db)
            .await
    }
}
