//! Product Ratings API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_ratings_api::infrastructure::driven_adapters::config::AppConfig;
use product_ratings_api::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use product_ratings_api::infrastructure::driven_adapters::{
    PostgresProductRepository, PostgresRatingRepository,
};
use product_ratings_api::infrastructure::driving_adapters::api_rest::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_ratings_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let product_repository = Arc::new(PostgresProductRepository::new(pool.clone()));
    let rating_repository = Arc::new(PostgresRatingRepository::new(pool));

    let app_state = AppState::new(product_repository, rating_repository);

    // Build router
    let app = router(app_state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
