//! Summarizes each uploaded document, then classifies the batch into a content type.
//!
//! Calls are sequential: one summary per file in upload order, then one classification.
//! Any failure discards everything gathered so far.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::documents::content_type::{normalize_content_type, ContentType};
use crate::documents::extract::{extract_text, UploadedDocument};
use crate::documents::prompts::{CONTENT_TYPE_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    pub id: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDocumentsResponse {
    pub content_type: String,
    pub file_summaries: Vec<FileSummary>,
}

/// Files and ids are paired by position, so the counts must match.
pub fn validate_pairing(documents: &[UploadedDocument], file_ids: &[String]) -> Result<(), AppError> {
    if documents.len() != file_ids.len() {
        return Err(AppError::Validation(
            "Mismatch between number of files and file IDs.".to_string(),
        ));
    }
    if documents.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "At least one file is required.".to_string(),
        ));
    }
    Ok(())
}

pub async fn process_documents(
    documents: &[UploadedDocument],
    file_ids: &[String],
    llm: &dyn TextGenerator,
    classification_char_budget: usize,
) -> Result<ProcessDocumentsResponse, AppError> {
    validate_pairing(documents, file_ids)?;

    summarize_and_classify(documents, file_ids, llm, classification_char_budget)
        .await
        .map_err(|e| {
            AppError::Llm(format!(
                "An error occurred while processing the documents: {e:#}"
            ))
        })
}

async fn summarize_and_classify(
    documents: &[UploadedDocument],
    file_ids: &[String],
    llm: &dyn TextGenerator,
    classification_char_budget: usize,
) -> Result<ProcessDocumentsResponse> {
    let mut sections = Vec::with_capacity(documents.len());
    let mut file_summaries = Vec::with_capacity(documents.len());

    for (document, id) in documents.iter().zip(file_ids) {
        let text = extract_text(document).await;
        sections.push(format!("--- FILE: {} ---\n{}", document.file_name, text));

        let prompt = SUMMARY_PROMPT_TEMPLATE.replace("{document}", &text);
        let summary = llm
            .generate(&prompt)
            .await
            .with_context(|| format!("summarizing '{}'", document.file_name))?;
        debug!(file_id = %id, chars = text.len(), "Summarized document");

        file_summaries.push(FileSummary {
            id: id.clone(),
            summary: summary.trim().to_string(),
        });
    }

    let combined = truncate_chars(&sections.join("\n\n"), classification_char_budget);
    let prompt = CONTENT_TYPE_PROMPT_TEMPLATE
        .replace("{choices}", &ContentType::prompt_choices())
        .replace("{content}", &combined);
    let answer = llm
        .generate(&prompt)
        .await
        .context("classifying content type")?;
    let content_type = normalize_content_type(&answer);

    info!(
        files = file_summaries.len(),
        content_type = %content_type,
        "Processed documents"
    );

    Ok(ProcessDocumentsResponse {
        content_type,
        file_summaries,
    })
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
