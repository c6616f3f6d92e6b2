use tracing_subscriber::{EnvFilter, fmt};

use harvest_to_tempo::shared::config::Config;
use harvest_to_tempo::shell::{build_state, http};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let state = build_state(&config)?;
    let app = http::router(state);

    tracing::info!(
        "copy endpoint: http://{}{}",
        config.bind_addr,
        http::COPY_TIME_ENTRIES_PATH
    );
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
