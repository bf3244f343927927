use std::net::SocketAddr;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, fmt};

use waitlist_counters::shell::config::Config;
use waitlist_counters::shell::http::router;
use waitlist_counters::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let state = match config.database_url.as_deref() {
        Some(database_url) => {
            tracing::info!("using PostgreSQL stores");
            AppState::postgres(&config, database_url).await?
        }
        None => {
            tracing::warn!("WAITLIST_DATABASE_URL not set, using in memory stores");
            AppState::in_memory(&config)
        }
    };

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
