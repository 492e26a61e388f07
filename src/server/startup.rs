use std::time::Duration;

use dioxus_logger::tracing;
use lettre::{AsyncSmtpTransport, Tokio1Executor};
use sea_orm::DatabaseConnection;
use tokio::{signal, sync::mpsc};
use tower_sessions::{cookie::SameSite, ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::server::{
    config::Config,
    error::AppError,
    model::mail::MailData,
    service::{
        auth::AuthService,
        mail::{listener, MAIL_QUEUE_CAPACITY},
    },
};

/// Hours of inactivity before a session expires.
const SESSION_LIFETIME_HOURS: i64 = 24;

/// How often expired sessions are purged from the store.
const EXPIRED_SESSION_SWEEP: Duration = Duration::from_secs(60);

/// Connects to the Postgres database and runs pending migrations.
///
/// The migrations also seed the rooms and restriction kinds, so the database is
/// ready for bookings once this returns.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(10)
        .min_connections(5)
        .max_lifetime(Duration::from_secs(5 * 60))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on the application's Postgres pool.
///
/// Creates the session table when missing and spawns a task deleting expired
/// sessions. Cookies are `SameSite=Lax` and `Secure` in production.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<PostgresStore>, AppError> {
    let store = PostgresStore::new(db.get_postgres_connection_pool().clone());
    store.migrate().await?;

    let deletion_store = store.clone();
    tokio::spawn(async move {
        if let Err(e) = deletion_store
            .continuously_delete_expired(EXPIRED_SESSION_SWEEP)
            .await
        {
            tracing::error!("Expired session cleanup stopped: {}", e);
        }
    });

    Ok(SessionManagerLayer::new(store)
        .with_secure(config.in_production)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::hours(
            SESSION_LIFETIME_HOURS,
        ))))
}

/// Creates the first staff user from `ADMIN_EMAIL` and `ADMIN_PASSWORD`.
///
/// Does nothing when either is unset or users already exist.
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        return Ok(());
    };

    if let Some(user) = AuthService::new(db).bootstrap_admin(email, password).await? {
        tracing::info!("Created staff user {}", user.email);
    }

    Ok(())
}

/// Spawns the mail listener on an SMTP transport and returns the queue's sender.
pub fn start_mail_listener(config: &Config) -> mpsc::Sender<MailData> {
    let (sender, receiver) = mpsc::channel(MAIL_QUEUE_CAPACITY);

    let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        .port(config.smtp_port)
        .build();

    tokio::spawn(listener::listen(receiver, transport));

    sender
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
