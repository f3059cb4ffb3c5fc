mod cli;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use trx_gateway::{
    config::Config, create_app, registry::PartnerRegistry, validation::RequestValidator, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Config => {
            print_config_report(&config);
            Ok(())
        }
        Commands::Serve => serve(config).await,
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let registry = PartnerRegistry::new(config.partners.clone());
    tracing::info!(partners = registry.len(), "partner registry loaded");

    let state = AppState {
        validator: Arc::new(RequestValidator::new(registry)),
    };
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_config_report(config: &Config) {
    println!("\n=== Configuration Report ===");
    println!("Server port: {}", config.server_port);
    println!("Partners:    {}", config.partners.len());
    for (key, _) in &config.partners {
        println!("  - {key}");
    }
    println!("============================\n");
}
