/// Returns the number of whitespace-delimited tokens in `text`.
///
/// Empty and whitespace-only input count as zero words. No locale-aware
/// tokenization is attempted.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
