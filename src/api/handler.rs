//! Request handlers - a thin router plus the summarize pipeline.
//!
//! This module handles:
//! - `GET /` (static landing page)
//! - `POST /summarize` (validate, call the provider, count words, log, respond)
//!
//! A single error boundary converts every lower-layer failure into the
//! uniform `{"error": ...}` body; the length validation runs first and
//! produces its fixed message before the provider is ever invoked.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::helpers;
use crate::ai::Summarizer;
use crate::core::models::{SummarizeForm, SummarizeResponse, SummaryRecord};
use crate::errors::SummarizeError;
use crate::journal::RequestLog;

/// Floor on the requested summary length, in words. Requests below it are
/// rejected before the provider is invoked. The same value is passed to the
/// provider as the lower word bound.
pub const MIN_SUMMARY_WORDS: usize = 30;

const LANDING_PAGE: &str = include_str!("../../templates/index.html");

/// Shared per-process state. The summarizer is constructed once at startup
/// and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn Summarizer>,
    pub request_log: RequestLog,
}

#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/summarize", post(summarize))
        .with_state(state)
}

pub async fn home() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Handler for `POST /summarize`.
///
/// Always responds `200 OK`: a success body with the summary and word
/// counts, or `{"error": message}` for any failure.
pub async fn summarize(
    State(state): State<AppState>,
    Form(form): Form<SummarizeForm>,
) -> Json<Value> {
    let correlation_id = Uuid::new_v4();

    match handle_summarize(&state, form).await {
        Ok(response) => {
            info!(
                %correlation_id,
                input_word_count = response.input_word_count,
                summary_word_count = response.summary_word_count,
                "summarize request completed"
            );
            Json(helpers::ok_summary(&response))
        }
        Err(e) => {
            error!(%correlation_id, "summarize request failed: {}", e);
            Json(helpers::err_response(&e.to_string()))
        }
    }
}

async fn handle_summarize(
    state: &AppState,
    form: SummarizeForm,
) -> Result<SummarizeResponse, SummarizeError> {
    let text = form
        .text
        .ok_or_else(|| SummarizeError::ParseError("missing form field: text".to_string()))?;
    let raw_length = form.summary_length.ok_or_else(|| {
        SummarizeError::ParseError("missing form field: summary_length".to_string())
    })?;

    let summary_length: i64 = raw_length.trim().parse().map_err(|e| {
        SummarizeError::ParseError(format!("summary_length is not an integer: {e}"))
    })?;

    // Strict less-than: exactly 30 is accepted.
    if summary_length < MIN_SUMMARY_WORDS as i64 {
        return Err(SummarizeError::SummaryLengthTooShort);
    }
    let max_words = usize::try_from(summary_length).map_err(|e| {
        SummarizeError::ParseError(format!("summary_length is out of range: {e}"))
    })?;

    let generated_summary = state
        .summarizer
        .summarize(&text, max_words, MIN_SUMMARY_WORDS)
        .await?;

    let record = SummaryRecord::new(text, generated_summary);

    // A failed append fails the whole request; nothing is returned to the
    // caller that was not durably logged.
    state.request_log.append(&record)?;

    Ok(SummarizeResponse::from(record))
}
