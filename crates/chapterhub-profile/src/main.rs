//! Chapter Hub Profile - HTTP server for public profile pages.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use chapterhub_profile::server::{self, shutdown_signal};
use chapterhub_profile::{AppState, Config};

/// Chapter Hub Profile - public profile pages.
#[derive(Parser, Debug)]
#[command(name = "chapterhub-profile")]
#[command(about = "HTML server for public member profiles", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG may come from the .env file, so load it before tracing
    let dotenv_loaded = std::path::Path::new(&args.dotenv).exists();
    if dotenv_loaded {
        dotenvy::from_path(&args.dotenv)?;
    }
    init_tracing();
    if dotenv_loaded {
        tracing::info!(path = %args.dotenv, "loaded environment file");
    }

    // Missing store settings are fatal here, never per request
    let config = Config::from_env()?;
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    server::serve(listener, AppState::new(config), shutdown_signal()).await
}
