use std::sync::Arc;

use animeta_api::api::{create_router, AppState};
use animeta_api::config::Config;
use animeta_api::db::{create_pool, PgUserStore};
use animeta_api::nlp::Tagger;
use animeta_api::services::{providers::AniListProvider, Lexicon};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("animeta_api=info,tower_http=info")),
        )
        .init();

    // Missing DATABASE_URL or ANILIST_API_URL is fatal here, before serving.
    let config = Config::from_env()?;

    // Startup singletons: tagger and lexicon are read-only after this point,
    // the pool and HTTP client are long-lived shared resources.
    let tagger = Arc::new(Tagger::load()?);
    let lexicon = Arc::new(Lexicon::new());

    let pool = create_pool(&config.database_url).await?;
    let store = Arc::new(PgUserStore::new(pool));
    let provider = Arc::new(AniListProvider::new(config.anilist_api_url.clone()));

    let state = AppState::new(tagger, lexicon, store, provider);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "animeta-api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
