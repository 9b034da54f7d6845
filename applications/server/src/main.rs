/// Vinyl Server - album catalogue HTTP service
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vinyl_core::AlbumStore;
use vinyl_server::{config::ServerConfig, create_router, state::AppState};
use vinyl_storage::SqliteAlbumRepository;

#[derive(Parser)]
#[command(name = "vinyl-server")]
#[command(about = "Vinyl album catalogue server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "VINYL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Insert randomly generated albums
    Seed {
        /// Number of albums to insert
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
    /// List all albums
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "vinyl_server=info,vinyl_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Seed { count } => seed(&config, count).await?,
        Commands::List => list(&config).await?,
    }

    Ok(())
}

/// Connect, verify the database answers and make sure the schema exists.
/// Any failure here aborts startup.
async fn open_repository(config: &ServerConfig) -> anyhow::Result<SqliteAlbumRepository> {
    let pool =
        vinyl_storage::create_pool(&config.storage.database_url, config.storage.max_connections)
            .await?;
    vinyl_storage::ping(&pool).await?;
    vinyl_storage::ensure_schema(&pool).await?;

    Ok(SqliteAlbumRepository::new(pool))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Vinyl Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let albums = open_repository(&config).await?;
    tracing::info!("Database connected");

    let app_state = AppState::new(Arc::new(albums));
    let app = create_router(app_state, &config.cors);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn seed(config: &ServerConfig, count: usize) -> anyhow::Result<()> {
    let albums = open_repository(config).await?;

    for _ in 0..count {
        let album = albums.add_random().await?;
        println!(
            "  {} - {} by {} ({:.2})",
            album.id, album.title, album.artist, album.price
        );
    }

    tracing::info!("Seeded {} albums", count);
    Ok(())
}

async fn list(config: &ServerConfig) -> anyhow::Result<()> {
    let albums = open_repository(config).await?;

    println!("Albums:");
    for album in albums.get_all().await? {
        println!(
            "  {} - {} by {} ({:.2})",
            album.id, album.title, album.artist, album.price
        );
    }

    Ok(())
}
