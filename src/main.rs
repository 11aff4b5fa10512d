use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use briefly::ai::LlmClient;
use briefly::api::handler::{AppState, router};
use briefly::core::config::AppConfig;
use briefly::journal::RequestLog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    briefly::setup_logging();

    let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;

    // The provider handle is built once and shared read-only by every
    // request; there is no per-request re-initialization.
    let summarizer = Arc::new(LlmClient::from_config(&config));
    info!(model = summarizer.model_name(), "summarization provider ready");

    let state = AppState {
        summarizer,
        request_log: RequestLog::new(&config.request_log_path),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
