use book_manager::{
    adapters::{mock::InMemoryBookRepository, postgres::PostgresBookRepository},
    api::{handlers::AppState, router::create_router},
    application::book::BookManagerService,
    config::{AppConfig, DEFAULT_LOG_FILTER},
    ports::BookRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Initialize repository
    let repository: Arc<dyn BookRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;

            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Connected to PostgreSQL and applied migrations");

            Arc::new(PostgresBookRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, using in-memory book repository");
            Arc::new(InMemoryBookRepository::new())
        }
    };

    // Create application state
    let app_state = Arc::new(AppState {
        book_service: BookManagerService::new(repository),
    });

    // Create router
    let app = create_router(app_state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
