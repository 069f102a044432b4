//! Krishi - smart agriculture assistant
//!
//! Serves the keyword chat bot and forwards crop-recommendation and
//! disease-detection requests to the ML backend.

mod api;
mod backend;
mod config;
mod responder;

use api::{create_router, AppState};
use backend::{HttpBackend, LoggingBackend};
use config::Config;
use responder::{IntentCatalog, IntentResponder, ReplyPicker, SeededPicker, ThreadRngPicker};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "krishi=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = Config::from_env()?;

    // Intent catalog
    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading intent catalog");
            IntentCatalog::load(path)?
        }
        None => IntentCatalog::builtin()?,
    };
    let picker: Arc<dyn ReplyPicker> = match config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded reply selection");
            Arc::new(SeededPicker::new(seed))
        }
        None => Arc::new(ThreadRngPicker),
    };
    let responder = IntentResponder::new(catalog, picker);
    tracing::info!(
        categories = responder.catalog().len(),
        fallback = responder.catalog().fallback().len(),
        "Intent catalog ready"
    );

    // Prediction backend
    let http_backend = HttpBackend::new(&config.backend_url, config.backend_timeout)?;
    let backend = Arc::new(LoggingBackend::new(Arc::new(http_backend)));
    tracing::info!(
        url = %config.backend_url,
        timeout_secs = config.backend_timeout.as_secs(),
        "Prediction backend configured"
    );

    let state = AppState::new(responder, backend);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new().gzip(true).br(true).deflate(true);

    let app = create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(compression),
    );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Krishi server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
