// Errors surfaced to the user for one upload attempt. All are recoverable: a new upload starts fresh.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Neither the content type nor the file extension is an accepted tabular format.
    #[error("Please upload a valid CSV file (rejected {file_name:?})")]
    RejectedFileType { file_name: String },

    /// The input could not be tokenized into rows/columns; the whole upload is discarded.
    #[error("CSV parsing error{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Parse { line: Option<u64>, message: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A newer upload started before this one finished; its result was dropped.
    #[error("Upload superseded by a newer file")]
    Superseded,

    #[error("Parser task failed: {0}")]
    ParserTask(#[from] tokio::task::JoinError),
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        let message = match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!("expected {expected_len} fields, found {len}"),
            csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {err}"),
            _ => err.to_string(),
        };
        DashboardError::Parse { line, message }
    }
}
