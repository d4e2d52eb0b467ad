mod applications;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod scoring;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::routes::build_router;
use crate::scoring::{load_skills, PriorityScorer};
use crate::state::AppState;
use crate::store::{ApplicationStore, InMemoryApplicationStore, PgApplicationStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Tracker API v{}", env!("CARGO_PKG_VERSION"));

    // The service must not start without its skill corpus
    let corpus = load_skills(&config.skills_path).context("Failed to load skill corpus")?;
    if corpus.is_empty() {
        warn!("Skill corpus at {} is empty; every skill match will be 0", config.skills_path.display());
    }
    let scorer = Arc::new(PriorityScorer::new(corpus, config.scoring));
    info!(
        "Priority scorer ready (skill weight {}, deadline weight {}, half point {} days)",
        config.scoring.skill_weight,
        config.scoring.deadline_weight,
        config.scoring.urgency_half_point_days
    );

    let store: Arc<dyn ApplicationStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            ensure_schema(&pool).await?;
            Arc::new(PgApplicationStore::new(pool))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory store");
            Arc::new(InMemoryApplicationStore::new())
        }
    };

    let state = AppState { store, scorer };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
