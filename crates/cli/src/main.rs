use std::path::PathBuf;

use clap::Parser;
use server::{print_banner, Config};

#[derive(Parser)]
#[command(name = "moviefeed", version)]
#[command(about = "Serve an RSS feed of recently aired TV episodes", long_about = None)]
struct Cli {
    /// Path to the config file (.yaml, .yml, .json or .toml)
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    print_banner(env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config {}: {}", cli.config.display(), e);
            return Err(e.into());
        }
    };

    server::run_server(config).await
}
