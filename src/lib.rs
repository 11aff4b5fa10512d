/// Briefly - a small web service that summarizes text with a pretrained
/// sequence-to-sequence model and keeps an append-only log of every request.
///
/// # Architecture
///
/// The system uses:
/// - axum for the HTTP surface (`GET /` landing page, `POST /summarize`)
/// - an OpenAI Responses API client as the summarization provider
/// - a JSON-lines file as the append-only request log
/// - Tokio for the async runtime
///
/// The provider is constructed once at startup and shared read-only across
/// all requests. Each request is stateless; the only state that outlives a
/// request is the log file.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use briefly::ai::LlmClient;
/// use briefly::api::handler::{router, AppState};
/// use briefly::core::config::AppConfig;
/// use briefly::journal::RequestLog;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     briefly::setup_logging();
///
///     let config = AppConfig {
///         bind_addr: "127.0.0.1:8080".to_string(),
///         request_log_path: "data.json".into(),
///         openai_api_key: "dummy_key".to_string(),
///         openai_org_id: None,
///         openai_model: None,
///     };
///
///     let state = AppState {
///         summarizer: Arc::new(LlmClient::from_config(&config)),
///         request_log: RequestLog::new(&config.request_log_path),
///     };
///
///     let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
///     axum::serve(listener, router(state)).await?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod journal;
pub mod utils;

pub use errors::SummarizeError;

/// Configure structured logging for the server process.
///
/// Sets up tracing-subscriber with an environment-driven filter
/// (`RUST_LOG`, defaulting to `info`). Call once at process start.
///
/// # Example
///
/// ```
/// briefly::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .try_init();
}
