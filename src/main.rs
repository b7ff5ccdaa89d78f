use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stringkeeper::config::{Settings, DEFAULT_SETTINGS_FILE};
use stringkeeper::persist::Persistor;
use stringkeeper::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // the settings file may be given as the only argument, without extension
    let file = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_SETTINGS_FILE.to_string());
    let settings = Settings::load(&file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let persistor = Persistor::new(settings.persistence_mode())?;
    info!(strings = persistor.count()?, "store opened");

    let app = server::router(Arc::new(persistor));
    let listener = tokio::net::TcpListener::bind(&settings.address).await?;
    info!(address = %settings.address, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
