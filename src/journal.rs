//! Append-only request log.
//!
//! Each successful request adds exactly one line to the backing file; a line
//! is one `SummaryRecord` serialized as a standalone JSON object. There is
//! no rotation, no size bound and no coordination between concurrent
//! writers beyond OS append-mode semantics.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::models::SummaryRecord;
use crate::errors::SummarizeError;

#[derive(Debug, Clone)]
pub struct RequestLog {
    path: PathBuf,
}

impl RequestLog {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `record` as a single JSON line, creating the file if needed.
    /// The file handle is released before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or the file
    /// cannot be opened or written.
    pub fn append(&self, record: &SummaryRecord) -> Result<(), SummarizeError> {
        let line = serde_json::to_string(record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;

        debug!(path = %self.path.display(), "appended summary record");
        Ok(())
    }
}
