//! PFS repository registry server

use std::net::SocketAddr;

use camino::Utf8PathBuf;
use clap::Parser;
use eyre::WrapErr;
use pfs::{PfsBuilder, RepoRegistry, ServerConfig};

#[derive(Debug, Parser)]
#[command(name = "pfsd", about = "PFS repository registry server")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Address to listen on, overrides the configuration file
    #[arg(long)]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(listen) = args.listen {
        config.listen = listen;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let registry = RepoRegistry::new();
    let app = PfsBuilder::new().registry(registry.clone()).build();

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .wrap_err_with(|| format!("binding {}", config.listen))?;

    tracing::info!("PFS listening on http://{}", config.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(repos = registry.len(), "PFS shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "unable to listen for shutdown signal");
    }
}
