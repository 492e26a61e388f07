use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restriction::Table)
                    .if_not_exists()
                    .col(pk_auto(Restriction::Id))
                    .col(string(Restriction::RestrictionName))
                    .col(
                        timestamp_with_time_zone(Restriction::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Restriction::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restriction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Restriction {
    Table,
    Id,
    RestrictionName,
    CreatedAt,
    UpdatedAt,
}
