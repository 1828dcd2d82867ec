use tracing::info;
use tracing_subscriber::FmtSubscriber;

use docgate::app;
use docgate::config::Config;
use docgate::errors::Result;
use docgate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing::subscriber::set_global_default(FmtSubscriber::default()).unwrap();

    let config = Config::from_env()?;
    let state = AppState::init(config).await?;

    info!("Starting server");

    let listener = tokio::net::TcpListener::bind(&state.config.bind_addr).await?;
    info!("Serving gated docs at http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
