use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000002_create_room_table::Room,
    m20260101_000003_create_restriction_table::Restriction,
    m20260101_000004_create_reservation_table::Reservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomRestriction::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomRestriction::Id))
                    .col(date(RoomRestriction::StartDate))
                    .col(date(RoomRestriction::EndDate))
                    .col(integer(RoomRestriction::RoomId))
                    .col(integer_null(RoomRestriction::ReservationId))
                    .col(integer(RoomRestriction::RestrictionId))
                    .col(
                        timestamp_with_time_zone(RoomRestriction::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(RoomRestriction::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_restriction_room_id")
                            .from(RoomRestriction::Table, RoomRestriction::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_restriction_reservation_id")
                            .from(RoomRestriction::Table, RoomRestriction::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_restriction_restriction_id")
                            .from(RoomRestriction::Table, RoomRestriction::RestrictionId)
                            .to(Restriction::Table, Restriction::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_restriction_dates")
                    .table(RoomRestriction::Table)
                    .col(RoomRestriction::StartDate)
                    .col(RoomRestriction::EndDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_restriction_room_id")
                    .table(RoomRestriction::Table)
                    .col(RoomRestriction::RoomId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomRestriction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomRestriction {
    Table,
    Id,
    StartDate,
    EndDate,
    RoomId,
    ReservationId,
    RestrictionId,
    CreatedAt,
    UpdatedAt,
}
