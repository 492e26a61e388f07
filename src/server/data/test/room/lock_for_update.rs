use sea_orm::{DbBackend, QueryTrait, TransactionTrait};

use super::*;
use crate::server::data::room::select_for_update;

/// Tests locking a room inside a transaction on SQLite.
///
/// Expected: Ok for known and unknown rooms, and the transaction commits
#[tokio::test]
async fn locks_room_inside_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let room = factory::room::create_room(db).await?;

    let txn = db.begin().await?;
    let repo = RoomRepository::new(&txn);
    repo.lock_for_update(room.id).await?;
    repo.lock_for_update(999).await?;
    txn.commit().await?;

    Ok(())
}

/// Tests the statement used to lock a room.
///
/// Expected: `FOR UPDATE` on Postgres only
#[test]
fn row_lock_is_postgres_only() {
    let postgres = select_for_update(1, DbBackend::Postgres)
        .build(DbBackend::Postgres)
        .to_string();
    let sqlite = select_for_update(1, DbBackend::Sqlite)
        .build(DbBackend::Sqlite)
        .to_string();

    assert!(postgres.ends_with("FOR UPDATE"));
    assert!(!sqlite.contains("FOR UPDATE"));
}
