// File intake: what the user picked, and whether it is accepted as tabular text.

use std::path::Path;

use crate::config::UploadConfig;
use crate::error::DashboardError;

pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// A single selected or dropped file.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub contents: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content_type: Option<&str>, contents: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.map(str::to_string),
            contents,
        }
    }

    /// Reads a file from disk; content type is `text/csv` for a `.csv` extension, otherwise unknown.
    pub async fn from_path(path: &Path) -> Result<Self, DashboardError> {
        let contents = tokio::fs::read(path)
            .await
            .map_err(|source| DashboardError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let content_type = path
            .extension()
            .filter(|ext| ext.eq_ignore_ascii_case("csv"))
            .map(|_| CSV_CONTENT_TYPE);
        Ok(Self::new(name, content_type, contents))
    }
}

/// Accepts the file when its content type or its name's extension is allowed.
pub fn accept_file(file: &UploadedFile, config: &UploadConfig) -> Result<(), DashboardError> {
    let type_ok = file
        .content_type
        .as_deref()
        .is_some_and(|ct| config.allowed_content_types.iter().any(|a| a == ct));
    let ext_ok = config
        .allowed_extensions
        .iter()
        .any(|ext| file.name.ends_with(&format!(".{}", ext.trim_start_matches('.'))));

    if type_ok || ext_ok {
        Ok(())
    } else {
        Err(DashboardError::RejectedFileType {
            file_name: file.name.clone(),
        })
    }
}
