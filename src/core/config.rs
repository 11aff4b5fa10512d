use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub request_log_path: PathBuf,
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            request_log_path: env::var("REQUEST_LOG_PATH")
                .unwrap_or_else(|_| "data.json".to_string())
                .into(),
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_org_id: env::var("OPENAI_ORG_ID").ok(),
            openai_model: env::var("OPENAI_MODEL").ok(),
        })
    }
}
