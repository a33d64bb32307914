use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use reimbursement_engine::api::{AppState, create_router};
use reimbursement_engine::config::{ConfigLoader, ServiceConfig};

/// Travel reimbursement calculation service.
#[derive(Debug, Parser)]
#[command(name = "reimbursement-engine", version, about)]
struct Cli {
    /// Path to the YAML service configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match ConfigLoader::load_or_default(cli.config.as_ref()) {
        Ok(loader) => loader.into_config(),
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    apply_overrides(&mut config, &cli);

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = serve(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn apply_overrides(config: &mut ServiceConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
}

async fn serve(config: ServiceConfig) -> std::io::Result<()> {
    let address = config.server.bind_address();
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Reimbursement engine listening");

    axum::serve(listener, router).await
}
