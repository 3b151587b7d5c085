use std::env;

use anyhow::Context;
use recipe_hub_core::{DataFile, Store};
use recipe_hub_server::config::ServerConfig;
use recipe_hub_server::{api, build_router, new_state};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Console logging filtered by RUST_LOG, defaulting to info.
fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_store(config: &ServerConfig) -> anyhow::Result<Store> {
    let today = chrono::Local::now().date_naive();
    let mut store = if config.seed {
        Store::with_sample_data(today)
    } else {
        Store::new()
    };

    if let Some(path) = &config.data_file {
        let data = DataFile::from_path(path)
            .with_context(|| format!("Failed to load data file {}", path.display()))?;
        let report = store.import(&data);
        for failure in &report.failures {
            tracing::warn!(
                section = ?failure.section,
                index = failure.index,
                error = %failure.error,
                "Skipped invalid entry in data file"
            );
        }
    }

    Ok(store)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json()?;
        println!("{}", spec);
        return Ok(());
    }

    init_telemetry();

    let config = ServerConfig::from_env()?;
    let store = build_store(&config)?;
    tracing::info!(
        recipes = store.recipes().len(),
        inventory = store.inventory().len(),
        "Store ready"
    );

    let app = build_router(new_state(store));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    tracing::info!("Server listening on {}", listener.local_addr()?);
    tracing::info!("OpenAPI spec available at /api-docs/openapi.json");

    axum::serve(listener, app).await?;
    Ok(())
}
