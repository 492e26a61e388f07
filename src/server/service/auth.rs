//! Staff authentication.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, User, STAFF_ACCESS_LEVEL},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks an email and password against the stored bcrypt hash.
    ///
    /// # Returns
    /// - `Ok(user_id)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError::DbErr | BcryptErr)` - Lookup or hash verification failed
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<i32, AppError> {
        let Some((user, password_hash)) =
            UserRepository::new(self.db).find_by_email(email).await?
        else {
            tracing::debug!("Login attempt for unknown email {}", email);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &password_hash)? {
            tracing::debug!("Incorrect password for user {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user.id)
    }

    /// Creates the first staff user when the user table is empty.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The admin was created
    /// - `Ok(None)` - Users already exist; nothing was done
    pub async fn bootstrap_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.count().await? > 0 {
            return Ok(None);
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
        let user = repo
            .create(CreateUserParam {
                first_name: "Admin".to_string(),
                last_name: "User".to_string(),
                email: email.to_string(),
                password_hash,
                access_level: STAFF_ACCESS_LEVEL,
            })
            .await?;

        Ok(Some(user))
    }
}
