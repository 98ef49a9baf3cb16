use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info};

use crate::documents::extract::UploadedDocument;
use crate::documents::processor::{process_documents, ProcessDocumentsResponse};
use crate::errors::AppError;
use crate::state::AppState;

const FILES_FIELD: &str = "files";
const FILE_IDS_FIELD: &str = "file_ids";

/// Parallel lists read from the multipart body, in arrival order.
#[derive(Debug, Default)]
pub struct DocumentUpload {
    pub documents: Vec<UploadedDocument>,
    pub file_ids: Vec<String>,
}

/// Reads `files` and `file_ids` parts; other part names are skipped.
pub async fn collect_upload(mut multipart: Multipart) -> Result<DocumentUpload, AppError> {
    let mut upload = DocumentUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILES_FIELD) => {
                let file_name = field.file_name().unwrap_or("untitled").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Failed to read file bytes", e))?;
                debug!(file_name = %file_name, size = bytes.len(), "Received file part");
                upload.documents.push(UploadedDocument { file_name, bytes });
            }
            Some(FILE_IDS_FIELD) => {
                let id = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Failed to read file id", e))?;
                upload.file_ids.push(id);
            }
            other => debug!(field = ?other, "Ignoring unexpected multipart field"),
        }
    }

    Ok(upload)
}

/// Oversized bodies become 413; every other multipart failure is a 400.
fn multipart_error(context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(
            "Upload exceeds the maximum allowed request size.".to_string(),
        )
    } else {
        AppError::Validation(format!("{context}: {e}"))
    }
}

/// POST /process-documents
///
/// Summarizes each uploaded file and picks a content type for the whole batch.
pub async fn handle_process_documents(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ProcessDocumentsResponse>, AppError> {
    let upload = collect_upload(multipart).await?;
    info!(
        files = upload.documents.len(),
        ids = upload.file_ids.len(),
        "Processing documents"
    );

    let response = process_documents(
        &upload.documents,
        &upload.file_ids,
        state.llm.as_ref(),
        state.config.classification_char_budget,
    )
    .await?;

    Ok(Json(response))
}
