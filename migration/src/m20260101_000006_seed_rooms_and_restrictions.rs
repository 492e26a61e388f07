use sea_orm_migration::prelude::*;

use super::{
    m20260101_000002_create_room_table::Room,
    m20260101_000003_create_restriction_table::Restriction,
};

const ROOMS: [&str; 2] = ["General's Quarters", "Major's Suite"];

/// Order matters: the application refers to these rows by id
/// (1 = reservation, 2 = owner block).
const RESTRICTIONS: [&str; 2] = ["Reservation", "Owner Block"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut rooms = Query::insert();
        rooms.into_table(Room::Table).columns([Room::RoomName]);
        for name in ROOMS {
            rooms.values_panic([name.into()]);
        }
        manager.exec_stmt(rooms).await?;

        let mut restrictions = Query::insert();
        restrictions
            .into_table(Restriction::Table)
            .columns([Restriction::RestrictionName]);
        for name in RESTRICTIONS {
            restrictions.values_panic([name.into()]);
        }
        manager.exec_stmt(restrictions).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Restriction::Table)
                    .and_where(Expr::col(Restriction::RestrictionName).is_in(RESTRICTIONS))
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Room::Table)
                    .and_where(Expr::col(Room::RoomName).is_in(ROOMS))
                    .to_owned(),
            )
            .await
    }
}
