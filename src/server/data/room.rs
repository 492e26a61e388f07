//! Room data repository.

use sea_orm::{ConnectionTrait, DbBackend, DbErr, EntityTrait, QueryOrder, QuerySelect, Select};

use crate::server::model::room::Room;

/// Repository providing read access to rooms.
pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a room by id.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Room found
    /// - `Ok(None)` - No room with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Locks the room's row until the surrounding transaction ends.
    ///
    /// Bookings of the same room queue up behind the lock, so the availability
    /// check that follows sees every booking committed before it. Only Postgres
    /// takes a row lock; SQLite already serializes writers. An unknown id locks
    /// nothing.
    pub async fn lock_for_update(&self, id: i32) -> Result<(), DbErr> {
        select_for_update(id, self.db.get_database_backend())
            .one(self.db)
            .await?;

        Ok(())
    }

    /// Gets every room ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::RoomName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }
}

/// `SELECT` of one room, with `FOR UPDATE` on Postgres.
pub(crate) fn select_for_update(id: i32, backend: DbBackend) -> Select<entity::room::Entity> {
    let query = entity::prelude::Room::find_by_id(id);

    match backend {
        DbBackend::Postgres => query.lock_exclusive(),
        _ => query,
    }
}
