//! # bendeskd — bendesk daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Construct the file-backed adapters (record store, price table source)
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use bendesk_adapter_http_axum::state::AppState;
use bendesk_adapter_storage_file::{CsvPriceTableSource, JsonFileRecordStore};
use bendesk_app::services::estimate_service::EstimateService;
use bendesk_app::services::record_service::RecordService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Adapters
    let record_store = JsonFileRecordStore::new(&config.storage.records_path);
    let price_source = CsvPriceTableSource::new(&config.storage.price_table_path);

    // Services
    let record_service = RecordService::new(record_store);
    let estimate_service = EstimateService::new(price_source);

    // HTTP
    let state = AppState::new(record_service, estimate_service);
    let app = bendesk_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "bendeskd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
