use std::sync::Arc;

use depot_api::{Settings, router};
use depot_registry::{MemoryStore, PackageStore, PostgresStore, RegistryService};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = Settings::load()?;

    let store: Arc<dyn PackageStore> = match settings.database.url.as_deref() {
        Some(url) => {
            let store = PostgresStore::connect(url).await?;
            store.initialize().await?;
            tracing::info!("using postgres package store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("no database configured, packages will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    let registry = RegistryService::new(store);
    let app = router(registry);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "package registry listening");
    axum::serve(listener, app).await?;

    Ok(())
}
