use std::error::Error;

use briefly::errors::SummarizeError;

#[test]
fn test_summarize_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SummarizeError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_validation_error_display_is_exact() {
    // Clients match on this message verbatim.
    let error = SummarizeError::SummaryLengthTooShort;
    assert_eq!(
        format!("{error}"),
        "Desired summary length should be at least 30 words."
    );
}

#[test]
fn test_summarize_error_display() {
    let error = SummarizeError::ProviderError("Model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access OpenAI API: Model unavailable"
    );

    let error = SummarizeError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );

    let error = SummarizeError::ParseError("missing form field: text".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to parse request: missing form field: text"
    );
}

#[test]
fn test_summarize_error_from_io_error() {
    let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let summarize_err: SummarizeError = err.into();

    match summarize_err {
        SummarizeError::LogError(msg) => assert!(msg.contains("denied")),
        _ => panic!("Unexpected error type"),
    }
}

#[test]
fn test_summarize_error_from_serde_json_error() {
    let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let summarize_err: SummarizeError = err.into();

    assert!(matches!(summarize_err, SummarizeError::LogError(_)));
}
