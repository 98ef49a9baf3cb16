use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
}

/// A client-side upload. `summary` is filled in by `/process-documents` and echoed back
/// by the client on later calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: String,
    pub file: FileInfo,
    #[serde(default)]
    pub summary: Option<String>,
}

impl UploadedFile {
    /// The summary, if present and non-empty. Whitespace-only summaries are kept.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub files: Vec<UploadedFile>,
    pub content_type: String,
}
