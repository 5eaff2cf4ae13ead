use anyhow::Context;

use stockroom_api::config::ApiConfig;
use stockroom_infra::ProductRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = ApiConfig::from_env()?;

    // One store for the lifetime of the process; nothing is persisted.
    let app = stockroom_api::app::build_app(ProductRepository::in_memory());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "product management api listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
