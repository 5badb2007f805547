use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wellnest::api;
use wellnest::store::{ItemStore, TaskStore};
use wellnest::uploads::UploadStore;

#[derive(Parser)]
#[command(name = "wellnest")]
#[command(about = "WellNest: organize, track, and improve your daily wellness habits")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the task service with its HTML front-end
    Tasks {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Directory attachments are written to and served from
        #[arg(long, default_value = "uploads")]
        uploads_dir: PathBuf,
    },
    /// Start the minimal item service
    Items {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, default_value = "8001")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "wellnest=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Tasks {
            host,
            port,
            uploads_dir,
        }) => serve_tasks(&host, port, uploads_dir).await?,
        Some(Commands::Items { host, port }) => serve_items(&host, port).await?,
        None => serve_tasks("127.0.0.1", 8000, PathBuf::from("uploads")).await?,
    }

    Ok(())
}

async fn serve_tasks(host: &str, port: u16, uploads_dir: PathBuf) -> anyhow::Result<()> {
    tracing::info!("Starting WellNest task service on port {}", port);

    let uploads = UploadStore::new(uploads_dir);
    uploads.ensure_dir().await?;

    let store = TaskStore::seeded();
    tracing::info!("Seeded {} tasks", store.len()?);

    let app = api::create_task_router(store, uploads);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("WellNest task service listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn serve_items(host: &str, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting WellNest item service on port {}", port);

    let store = ItemStore::seeded();
    tracing::info!("Seeded {} items", store.len()?);
    let app = api::create_item_router(store);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!(
        "WellNest item service listening on http://{}:{} (docs at /docs)",
        host,
        port
    );

    axum::serve(listener, app).await?;
    Ok(())
}
