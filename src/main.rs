use mimalloc::MiMalloc;
use tarot_nexus::config::Config;
use tarot_nexus::{ReferenceData, SqliteStore, TarotState, service, tarot_router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel,
        catalog_path = %cfg.catalog_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<builtin>".to_string())
    );

    // Any failure before the listener binds aborts startup.
    let store = SqliteStore::connect(&cfg.database_url).await?;
    store.init_schema().await?;

    let reference = match cfg.catalog_path.as_deref() {
        Some(path) => ReferenceData::load_from_file(path)?,
        None => {
            let data = ReferenceData::builtin();
            data.validate()?;
            data
        }
    };
    service::seed(&store, &reference).await?;

    let state = TarotState::new(store);
    let app = tarot_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
