mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let app = startup::build_app(AppState::new(db), config.cors_allowed_origin.as_deref())?;

    let listener = TcpListener::bind(&config.server_address).await?;
    tracing::info!("Starting server on {}", config.server_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
