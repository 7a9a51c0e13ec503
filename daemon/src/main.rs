//! Altair daemon binary
//!
//! Binds the HTTP boundary and serves health-check orchestrations.
//! Accepts an optional TOML config path as the first argument; host and
//! port come from `ALTAIR_HOST` / `ALTAIR_PORT` when set.

use altair_core::config::load_settings_from_toml_path;
use altair_core::SettingsFile;
use daemon::{resolve_config, router, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> altair_core::Result<()> {
    let config = resolve_config(
        std::env::var("ALTAIR_HOST").ok(),
        std::env::var("ALTAIR_PORT").ok(),
    )?;

    altair_core::utils::init_tracing(&config.log_level)?;
    info!("Starting Altair daemon");

    let settings = match std::env::args().nth(1) {
        Some(path) => load_settings_from_toml_path(path)?,
        None => SettingsFile::default(),
    };

    let state = AppState::new(settings.simulation);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Daemon listening on {}", addr);

    axum::serve(listener, router(state))
        .await
        .map_err(altair_core::CoreError::IoError)?;

    Ok(())
}
