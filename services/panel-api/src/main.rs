//! Land-cover panel API service.
//!
//! HTTP server behind the municipal land-cover dashboard: serves the filter
//! listings, filtered statistics rows, CSV export and georeferenced locator
//! maps with the selected municipality pinned.

mod handlers;
mod maps;
mod state;

use anyhow::Result;
use axum::{extract::Extension, routing::get, Router};
use clap::Parser;
use std::{env, net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "panel-api")]
#[command(about = "Land-cover panel API server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Directory holding the CSV tables and map sheets
    #[arg(long, env = "LANDCOVER_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Map sheet registry file
    #[arg(long, env = "LANDCOVER_MAPS_CONFIG", default_value = "config/maps.yaml")]
    maps_config: PathBuf,

    /// Number of tokio worker threads (default: number of CPU cores)
    #[arg(long)]
    worker_threads: Option<usize>,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build tokio runtime with configurable worker threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        info!("Configuring tokio runtime with {} worker threads", threads);
        runtime_builder.worker_threads(threads);
    } else if let Ok(threads_str) = env::var("TOKIO_WORKER_THREADS") {
        // Use environment variable if CLI arg not provided
        if let Ok(threads) = threads_str.parse::<usize>() {
            info!(
                "Configuring tokio runtime with {} worker threads (from env)",
                threads
            );
            runtime_builder.worker_threads(threads);
        }
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(args))?;
    Ok(())
}

async fn async_main(args: Args) -> Result<()> {
    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting land-cover panel API server");

    // Load the statistics table and map registry
    let state = Arc::new(AppState::new(&args.data_dir, &args.maps_config)?);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health_handler))
        // Filter listings
        .route("/api/municipalities", get(handlers::municipalities_handler))
        .route("/api/states", get(handlers::states_handler))
        .route("/api/years", get(handlers::years_handler))
        .route("/api/classes", get(handlers::classes_handler))
        // Filtered rows and export
        .route("/api/records", get(handlers::records_handler))
        .route("/api/export", get(handlers::export_handler))
        // Locator maps
        .route("/maps/:year", get(handlers::locator_map_handler))
        // Layer extensions
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());

    // Parse listen address
    let addr: SocketAddr = args.listen.parse()?;
    info!(address = %addr, "Listening");

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
