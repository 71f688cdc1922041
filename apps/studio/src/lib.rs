//! Host layer for listening exercises: local storage, the exercise
//! collection, session audio and the commands a UI calls into.

pub mod audio;
pub mod collection;
pub mod commands;
pub mod config;
pub mod persistence;
pub mod state;
pub mod storage;

use anyhow::Context;
use config::StudioConfig;
use state::AppState;
use storage::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. Later calls are ignored.
pub fn init_tracing(filter: &str) {
    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Read configuration, start logging and open the local store.
pub fn bootstrap() -> anyhow::Result<AppState> {
    let config = StudioConfig::from_env();
    init_tracing(&config.log_filter);
    open(config)
}

/// Open the local store described by `config`.
pub fn open(config: StudioConfig) -> anyhow::Result<AppState> {
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory: {:?}", parent))?;
    }

    tracing::info!("Opening local store at {:?}", config.db_path);
    let store = SqliteStore::open(&config.db_path)
        .with_context(|| format!("Failed to open local store: {:?}", config.db_path))?;

    Ok(AppState::new(store, config))
}
