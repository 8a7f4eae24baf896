use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510170002_create_comments"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("comments"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("ticket_id")).string_len(20).not_null())
                    .col(ColumnDef::new(Alias::new("comment")).text().not_null())
                    .col(ColumnDef::new(Alias::new("author")).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    // Orphan comments are rejected here, not by a lookup beforehand.
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("comments"), Alias::new("ticket_id"))
                            .to(Alias::new("tickets"), Alias::new("ticket_id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_ticket_id")
                    .table(Alias::new("comments"))
                    .col(Alias::new("ticket_id"))
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("comments")).to_owned())
            .await
    }
}
