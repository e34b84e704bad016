use book_catalog::{
    adapters::postgres::PostgresBookCatalog,
    api::{cors_layer, handlers::AppState, router::create_router},
    application::catalog::ServiceDependencies,
    config::Config,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_catalog=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        max_connections = config.database_max_connections,
        "Connecting to database"
    );

    // Initialize database connection pool
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    // Initialize adapters
    let book_catalog = Arc::new(PostgresBookCatalog::new(pool));

    let service_deps = ServiceDependencies { book_catalog };
    let app_state = Arc::new(AppState { service_deps });

    let app = create_router(app_state).layer(cors_layer(config.cors_allowed_origin.as_deref())?);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
