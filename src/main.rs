use clap::Parser;
use tracing_subscriber::EnvFilter;
use trafficmap::{Cli, Config, TrafficServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::try_from(Cli::parse())?;
    let server = TrafficServer::new(config)?;
    server.start().await
}
