//! Create `activities` table.
//! Column order is id, title, category, description, activity_date, status, created_at;
//! readers that scan positionally depend on it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(pk_auto(Activities::Id))
                    .col(text(Activities::Title).not_null())
                    .col(text(Activities::Category).not_null())
                    .col(text(Activities::Description).not_null())
                    .col(timestamp_with_time_zone(Activities::ActivityDate).not_null())
                    .col(text(Activities::Status).not_null().default("NEW"))
                    .col(
                        timestamp_with_time_zone(Activities::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Activities::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Activities {
    Table,
    Id,
    Title,
    Category,
    Description,
    ActivityDate,
    Status,
    CreatedAt,
}
