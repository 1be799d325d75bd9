pub mod banner;
pub mod config;
pub mod error;
pub mod feed;
pub mod handlers;
pub mod router;
pub mod state;

pub use banner::print_banner;
pub use config::{Config, ConfigError, ConfigFormat};
pub use error::{AppError, AppResult};
pub use router::create_router;
pub use state::AppState;

pub async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;
    let state = AppState::new(config);
    let app = create_router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
