/// Moody Server - song upload and mood-filtered query backend
use clap::{Parser, Subcommand};
use moody_server::{config::ServerConfig, create_router, services::HttpMediaStore, state::AppState};
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "moody-server")]
#[command(about = "Moody Player backend server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create the database and run migrations, then exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moody_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve().await?,
        Commands::Migrate => migrate().await?,
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Moody Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = moody_storage::create_pool(&config.storage.database_url).await?;
    moody_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Initialize media store client
    let media_store = Arc::new(HttpMediaStore::new(&config.media)?);
    tracing::info!("Media store client initialized");

    // Build application state and router
    let app_state = AppState::new(pool, media_store, config.upload.max_file_size_bytes());
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn migrate() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    let pool = moody_storage::create_pool(&config.storage.database_url).await?;
    moody_storage::run_migrations(&pool).await?;

    tracing::info!("Migrations applied to {}", config.storage.database_url);

    Ok(())
}
