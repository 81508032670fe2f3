//! Server entrypoint: resolve the environment profile, open the store,
//! mount the routes, serve.

use todo_api::{app, store, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let default_level = if config.debug { "todo_api=debug" } else { "todo_api=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.parse()?))
        .init();
    tracing::info!(env = %config.env, db = %config.db.db, "starting todo-api");

    let store = store::connect(&config).await?;
    let app = app(AppState::new(store));

    let listener = TcpListener::bind("0.0.0.0:5000").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
