use std::sync::Arc;
use store_stats::{
    AppState,
    config::Config,
    routes::routes,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "store_stats=info,warp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::new(&config));

    if !state.stats_enabled() {
        tracing::warn!("access statistics disabled via DISABLE_ACCESS_STATS");
    }

    tracing::info!(
        addr = %config.bind_addr,
        stats_timeout_ms = config.stats_timeout.as_millis() as u64,
        "store stats service listening"
    );
    warp::serve(routes(state)).run(config.bind_addr).await;

    Ok(())
}
