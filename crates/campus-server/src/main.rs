//! Campus Server - JSON API for the DIE campus site.
//!
//! Serves the course catalog, course applications and the assistant endpoints
//! backed by campus-core, plus the static site when a public directory is given.

mod handlers;
mod server;

use anyhow::Result;
use campus_core::config::ServerConfig;
use campus_core::Catalog;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "campus-server")]
#[command(about = "JSON API server for the DIE campus site")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value_t = ServerConfig::DEFAULT_PORT)]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = ServerConfig::DEFAULT_HOST)]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// JSON file with the course list (defaults to the built-in catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory of static site assets served for non-API paths
    #[arg(long)]
    public_dir: Option<PathBuf>,
}

fn init_logging(args: &Args) {
    // RUST_LOG wins over --debug when set
    let default_level = if args.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if args.log_json {
        FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .compact()
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    info!("Starting Campus Server");

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::seeded(),
    };
    info!("Catalog holds {} courses", catalog.len());

    if let Some(dir) = &args.public_dir {
        info!("Serving static files from {}", dir.display());
    }

    let addr = server::start_server(catalog, args.public_dir, &args.host, args.port).await?;

    // Supervising processes read the bound port from stdout
    println!("{}{}", ServerConfig::PORT_ANNOUNCE_PREFIX, addr.port());

    info!("Campus server running on {}", addr);

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
