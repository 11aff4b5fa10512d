//! Common helper functions for API handlers.
//!
//! Response builders shared across handlers. Every response the service
//! produces, success or error, is `200 OK`; failures are distinguished only
//! by the `error` key in the body.

use serde_json::{Value, json};

use crate::core::models::SummarizeResponse;

/// Returns the uniform error body: `{"error": message}`.
#[must_use]
pub fn err_response(message: &str) -> Value {
    json!({ "error": message })
}

/// Returns the success body for a completed summarization.
#[must_use]
pub fn ok_summary(response: &SummarizeResponse) -> Value {
    json!({
        "summary": response.summary,
        "input_word_count": response.input_word_count,
        "summary_word_count": response.summary_word_count,
        "input_text": response.input_text,
        "generated_summary": response.generated_summary
    })
}
