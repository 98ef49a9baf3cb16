use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::models::project::Project;
use crate::models::script::Script;
use crate::script::generator::generate_script;
use crate::state::AppState;

/// POST /generate-script
///
/// Turns the project's file summaries into a scene-by-scene script. No retry on bad output.
pub async fn handle_generate_script(
    State(state): State<AppState>,
    Json(project): Json<Project>,
) -> Result<Json<Script>, AppError> {
    info!(
        project = %project.name,
        files = project.files.len(),
        content_type = %project.content_type,
        "Generating script"
    );

    let script = generate_script(
        &project,
        state.llm.as_ref(),
        state.config.skip_unsummarized_files,
    )
    .await?;

    Ok(Json(script))
}
