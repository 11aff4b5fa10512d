use serde::{Deserialize, Serialize};

use crate::utils::words::word_count;

/// One entry in the append-only request log, one JSON object per line.
///
/// Both word counts are derived from the texts they describe; callers never
/// supply them. Records are immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub input_text: String,
    pub input_word_count: usize,
    pub generated_summary: String,
    pub summary_word_count: usize,
}

impl SummaryRecord {
    #[must_use]
    pub fn new(input_text: String, generated_summary: String) -> Self {
        let input_word_count = word_count(&input_text);
        let summary_word_count = word_count(&generated_summary);
        Self {
            input_text,
            input_word_count,
            generated_summary,
            summary_word_count,
        }
    }
}

/// Form body of `POST /summarize`. Both fields are required; they are
/// declared optional here so that a missing field reaches the handler and
/// flows into the generic error path instead of being rejected by the
/// extractor.
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeForm {
    pub text: Option<String>,
    pub summary_length: Option<String>,
}

/// Success body of `POST /summarize`.
///
/// `summary`/`generated_summary` and `input_text` intentionally duplicate
/// content; existing clients read both names.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub input_word_count: usize,
    pub summary_word_count: usize,
    pub input_text: String,
    pub generated_summary: String,
}

impl From<SummaryRecord> for SummarizeResponse {
    fn from(record: SummaryRecord) -> Self {
        Self {
            summary: record.generated_summary.clone(),
            input_word_count: record.input_word_count,
            summary_word_count: record.summary_word_count,
            input_text: record.input_text,
            generated_summary: record.generated_summary,
        }
    }
}
