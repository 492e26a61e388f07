mod model;
mod page;
mod server;

use dioxus_logger::tracing::{self, Level};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dioxus_logger::init(Level::INFO)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;

    startup::bootstrap_admin(&db, &config).await?;

    let mail = startup::start_mail_listener(&config);

    let state = AppState::new(
        db,
        mail,
        config.mail_from.clone(),
        config.owner_email.clone(),
    );

    let app = router::router(state, &config.static_dir)
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.app_address).await?;
    tracing::info!("Starting server on {}", config.app_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(startup::shutdown_signal())
    .await?;

    Ok(())
}
