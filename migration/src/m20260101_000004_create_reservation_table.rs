use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(string(Reservation::FirstName))
                    .col(string(Reservation::LastName))
                    .col(string(Reservation::Email))
                    .col(string(Reservation::Phone))
                    .col(date(Reservation::StartDate))
                    .col(date(Reservation::EndDate))
                    .col(integer(Reservation::RoomId))
                    .col(boolean(Reservation::Processed).default(false))
                    .col(
                        timestamp_with_time_zone(Reservation::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Reservation::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_email")
                    .table(Reservation::Table)
                    .col(Reservation::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_last_name")
                    .table(Reservation::Table)
                    .col(Reservation::LastName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    StartDate,
    EndDate,
    RoomId,
    Processed,
    CreatedAt,
    UpdatedAt,
}
