//! Restriction rows mirroring the seed migration.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Id of the "Reservation" restriction.
pub const RESERVATION: i32 = 1;

/// Id of the "Owner Block" restriction.
pub const OWNER_BLOCK: i32 = 2;

/// Inserts the "Reservation" and "Owner Block" rows with their fixed ids.
///
/// Called by `TestBuilder::build()` when the reservation tables are requested, since
/// room restrictions reference these rows through a foreign key.
pub async fn seed_restrictions(db: &DatabaseConnection) -> Result<(), DbErr> {
    let now = Utc::now();

    for (id, name) in [(RESERVATION, "Reservation"), (OWNER_BLOCK, "Owner Block")] {
        entity::restriction::ActiveModel {
            id: ActiveValue::Set(id),
            restriction_name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
