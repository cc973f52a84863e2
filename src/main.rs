use anyhow::Context;
use arremate::db::{init_db, init_memory_db, Repository};
use arremate::orchestration::Orchestrator;
use arremate::{api, config::Config};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = Config::from_env().context("configuration error")?;

    let pool = if config.database_path == ":memory:" {
        tracing::warn!("Using an in-memory database; deals will not survive a restart");
        init_memory_db().await
    } else {
        init_db(&config.database_path).await
    }
    .with_context(|| format!("failed to initialize database at {}", config.database_path))?;

    let store = Arc::new(Repository::new(pool));
    let orchestrator = Orchestrator::new(store)
        .with_default_min_profit(config.default_min_profit_percent);

    let app = api::create_router(api::AppState::new(Arc::new(orchestrator)));

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
