//! User domain models and parameters.

use chrono::{DateTime, Utc};

/// Lowest access level allowed into the admin area.
pub const STAFF_ACCESS_LEVEL: i32 = 3;

/// A staff member who can sign in to the admin dashboard.
///
/// The password hash stays in the data layer and is never part of this model.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// 1 = regular user, 3 = staff with admin dashboard access.
    pub access_level: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            access_level: entity.access_level,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_staff(&self) -> bool {
        self.access_level >= STAFF_ACCESS_LEVEL
    }
}

/// Parameters for creating a user; `password_hash` must already be a bcrypt hash.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub access_level: i32,
}

/// Parameters for updating a user's profile fields.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub access_level: i32,
}
