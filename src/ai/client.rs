//! LLM (`OpenAI`) API client module
//!
//! Encapsulates all LLM API interactions for generating summaries.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use super::Summarizer;
use crate::core::config::AppConfig;
use crate::errors::SummarizeError;

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const MAX_CONTEXT_TOKENS: usize = 128_000;
const MAX_OUTPUT_TOKENS: usize = 4_096;
const TOKEN_BUFFER: usize = 250;

// Rough tokens-per-word ratio used to size the output budget from the
// requested word bound.
const TOKENS_PER_WORD: usize = 2;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// LLM API client for generating summaries
pub struct LlmClient {
    api_key: String,
    org_id: Option<String>,
    model_name: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, org_id: Option<String>, model_name: String) -> Self {
        Self {
            api_key,
            org_id,
            model_name,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            config
                .openai_model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        )
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn build_prompt(
        &self,
        text: &str,
        max_words: usize,
        min_words: usize,
    ) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(format!(
                    "You are a summarization assistant. \
                     Summarize the user's text in at least {min_words} and at most \
                     {max_words} words. Output ONLY the summary text: no preamble, \
                     no headings, no commentary. Do not invent facts that are not \
                     in the input."
                )),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(text.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }

    /// Builds the Responses API request body for a prompt.
    ///
    /// `temperature` is pinned to zero so that the same input and word
    /// bounds always produce the same summary.
    #[must_use]
    pub fn build_request_body(&self, prompt: &[ChatCompletionMessage], max_words: usize) -> Value {
        let max_output_tokens = (max_words * TOKENS_PER_WORD + TOKEN_BUFFER).min(MAX_OUTPUT_TOKENS);

        json!({
            "model": self.model_name,
            "input": build_responses_input_from_prompt(prompt),
            "max_output_tokens": max_output_tokens,
            "temperature": 0
        })
    }

    /// # Errors
    ///
    /// Returns an error if the input does not fit the model context, the
    /// HTTP request to `OpenAI` fails, or the response cannot be parsed
    /// into the expected shape.
    pub async fn generate_summary(
        &self,
        text: &str,
        max_words: usize,
        min_words: usize,
    ) -> Result<String, SummarizeError> {
        let prompt = self.build_prompt(text, max_words, min_words);

        #[cfg(feature = "debug-logs")]
        info!("Using summarization prompt:\n{:?}", prompt);

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
            .sum::<usize>();

        info!(
            estimated_input_tokens,
            max_words, min_words, "generating summary"
        );

        if estimated_input_tokens + MAX_OUTPUT_TOKENS + TOKEN_BUFFER > MAX_CONTEXT_TOKENS {
            return Err(SummarizeError::ProviderError(
                "input text is too long to summarize".to_string(),
            ));
        }

        let request_body = self.build_request_body(&prompt, max_words);

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                SummarizeError::HttpError(format!("Failed to build OpenAI HTTP client: {e}"))
            })?;

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| SummarizeError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| SummarizeError::HttpError(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                SummarizeError::HttpError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        let response = client
            .post("https://api.openai.com/v1/responses")
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizeError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizeError::ProviderError(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizeError::ProviderError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        extract_output_text(&response_json)
            .ok_or_else(|| SummarizeError::ProviderError("No text in response".to_string()))
    }
}

#[async_trait::async_trait]
impl Summarizer for LlmClient {
    async fn summarize(
        &self,
        text: &str,
        max_words: usize,
        min_words: usize,
    ) -> Result<String, SummarizeError> {
        self.generate_summary(text, max_words, min_words).await
    }
}

/// Build Responses API input payload from a chat-style prompt.
/// - Filters out assistant messages (Responses treats assistant content as output)
/// - Emits typed parts: { type: "`input_text`", text }
pub(crate) fn build_responses_input_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter(|m| !matches!(m.role, MessageRole::assistant))
        .map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };

            let mut parts: Vec<Value> = Vec::new();
            if let Content::Text(t) = &m.content {
                parts.push(json!({
                    "type": "input_text",
                    "text": t
                }));
            }

            json!({
                "role": role_str,
                "content": parts
            })
        })
        .collect()
}

/// Extracts the generated text from a Responses API payload, preferring the
/// flattened `output_text` field and falling back to walking the `output`
/// item array.
pub(crate) fn extract_output_text(response_json: &Value) -> Option<String> {
    if let Some(text) = response_json.get("output_text").and_then(|v| v.as_str()) {
        return Some(text.to_string());
    }

    let mut collected: Vec<String> = Vec::new();
    if let Some(items) = response_json.get("output").and_then(|o| o.as_array()) {
        for item in items {
            if let Some(parts) = item.get("content").and_then(|c| c.as_array()) {
                for p in parts {
                    let is_output_text = p
                        .get("type")
                        .and_then(|t| t.as_str())
                        .is_some_and(|t| t == "output_text");
                    if !is_output_text {
                        continue;
                    }
                    if let Some(s) = p.get("text").and_then(|t| t.as_str()) {
                        collected.push(s.to_string());
                    } else if let Some(s) = p
                        .get("text")
                        .and_then(|t| t.get("value"))
                        .and_then(|v| v.as_str())
                    {
                        collected.push(s.to_string());
                    }
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}
