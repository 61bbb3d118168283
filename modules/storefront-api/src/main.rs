use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use storefront_api::{
    build_router,
    catalog::load_catalog,
    store::{MemoryReviewStore, PgReviewStore, ReviewStore},
    AppState,
};
use storefront_common::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("storefront_api=info".parse()?)
                .add_directive("storefront_engine=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = load_catalog(&config.catalog_dir);

    let store: Arc<dyn ReviewStore> = match config.database_url.as_deref() {
        Some(url) => {
            let store = PgReviewStore::connect_lazy(url)?;
            if let Err(e) = store.ensure_schema().await {
                // Reads fall back to seeded content until the database is reachable.
                warn!(error = %e, "Could not prepare reviews table");
            }
            Arc::new(store)
        }
        None => {
            info!("DATABASE_URL not set, using in-memory review store");
            Arc::new(MemoryReviewStore::new())
        }
    };

    let addr = format!("{}:{}", config.web_host, config.web_port);
    let state = Arc::new(AppState::new(config, catalog, store));
    let app = build_router(state);

    info!("Storefront API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
