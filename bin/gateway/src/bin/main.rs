use artifact::Deployment;
use clap::Parser;
use gateway::{config::Config, metrics, AppState};
use std::path::Path;
use token::TokenService;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "gateway")]
#[command(about = "REST gateway for the JToken ERC20 contract")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting token gateway");

    let cli = Cli::parse();
    let config = if Path::new(&cli.config).exists() {
        Config::from_file(&cli.config)?
    } else {
        warn!("Config file {} not found, using defaults", cli.config);
        Config::default()
    };

    info!("Loaded config:");
    info!("  RPC URL: {}", config.rpc_url);
    info!("  Artifact dir: {}", config.shared_path.display());
    info!("  Listen address: {}", config.listen_addr);

    let metrics = metrics::Metrics::new();
    if let Some(port) = config.metrics_port {
        metrics::install_prometheus_exporter(port)?;
        info!("Prometheus exporter listening on port {}", port);
    }

    // The deployment reference is resolved once at startup. When the deploy
    // step has not run yet, the gateway still serves, but every token route
    // answers 404 until a restart after deployment.
    let state = match Deployment::load(&config.shared_path) {
        Ok(deployment) => {
            info!("Contract address: {}", deployment.address);
            let provider = client::create_provider(&config.rpc_url).await?;
            let service =
                TokenService::new(provider, config.rpc_url.clone(), deployment.address);
            AppState::new(service, metrics)
        }
        Err(e) => {
            warn!("Deployment artifacts unavailable: {}", e);
            warn!("Token routes will fail closed until the contract is deployed");
            AppState::empty(metrics)
        }
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("Listening on {}", config.listen_addr);

    axum::serve(listener, gateway::router(state)).await?;

    Ok(())
}
