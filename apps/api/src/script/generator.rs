//! Builds the scriptwriter prompt from a project and parses the model's JSON.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{generate_json, LlmError, TextGenerator};
use crate::models::project::Project;
use crate::models::script::Script;
use crate::script::prompts::SCRIPT_PROMPT_TEMPLATE;

const MISSING_SUMMARY: &str = "(no summary available)";

/// "- name: summary" per file. Files without a summary are dropped when `skip_unsummarized` is set.
pub fn summary_lines(project: &Project, skip_unsummarized: bool) -> String {
    project
        .files
        .iter()
        .filter_map(|f| match f.summary() {
            Some(summary) => Some(format!("- {}: {}", f.file.name, summary)),
            None if skip_unsummarized => None,
            None => Some(format!("- {}: {}", f.file.name, MISSING_SUMMARY)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_script_prompt(project: &Project, skip_unsummarized: bool) -> String {
    SCRIPT_PROMPT_TEMPLATE
        .replace("{project_name}", &project.name)
        .replace("{content_type}", &project.content_type)
        .replace("{file_summaries}", &summary_lines(project, skip_unsummarized))
}

/// One model call; the reply must parse as a `Script` with non-empty `raw`.
pub async fn generate_script(
    project: &Project,
    llm: &dyn TextGenerator,
    skip_unsummarized: bool,
) -> Result<Script, AppError> {
    let prompt = build_script_prompt(project, skip_unsummarized);

    let script = generate_json::<Script>(llm, &prompt)
        .await
        .and_then(|script| {
            if script.raw.trim().is_empty() {
                Err(LlmError::EmptyContent)
            } else {
                Ok(script)
            }
        })
        .map_err(|e| {
            AppError::Llm(format!(
                "Failed to generate script. The AI model may have returned an invalid format. {e}"
            ))
        })?;

    info!(
        project = %project.name,
        scenes = script.scenes.len(),
        "Generated script"
    );

    Ok(script)
}
