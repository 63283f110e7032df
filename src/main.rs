use std::error::Error;
use std::sync::Arc;

use worldbuilder::config::Config;
use worldbuilder::db;
use worldbuilder::routes;
use worldbuilder::services::module::{MemoryModuleStore, ModuleStore, PgModuleStore};
use worldbuilder::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = Config::from_env()?;

    let store: Arc<dyn ModuleStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections).await?;
            tracing::info!(max_connections = config.db_max_connections, "database ready");
            Arc::new(PgModuleStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; modules are kept in memory and lost on restart");
            Arc::new(MemoryModuleStore::new())
        }
    };

    let state = AppState::new(store, config.environment.clone());
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, environment = %config.environment, "world builder backend listening");
    axum::serve(listener, app).await?;
    Ok(())
}
