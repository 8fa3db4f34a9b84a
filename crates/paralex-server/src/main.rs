use tracing_subscriber::EnvFilter;

use paralex_server::config::ServerConfig;
use paralex_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    if config.api_key.is_none() {
        tracing::warn!(
            "OPENAI_API_KEY is not set; transcription, chat, and suggestions will report a configuration error"
        );
    }

    let addr = config.addr.clone();
    let state = AppState::new(config)?;
    let app = paralex_server::app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "paralex server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
