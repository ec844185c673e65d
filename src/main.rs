// src/main.rs
use std::sync::Arc;
use tag_cloud::config::Config;
use tag_cloud::routes::create_router;
use tag_cloud::storage::catalog::TagCatalog;
use tag_cloud::AppState;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tag_cloud=info,tower_http=info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting tag cloud server...");

    let config = Config::from_env()?;

    tracing::info!(
        "Tag settings: colors={} sort={}:{}",
        config.settings.issues_use_colors,
        config.settings.issues_sort_by,
        config.settings.issues_sort_order
    );

    let catalog = TagCatalog::load(&config.tags_file)?;

    let state = Arc::new(AppState {
        config: config.clone(),
        catalog,
    });

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server_addr()?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("Tags: http://{}/tags", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
