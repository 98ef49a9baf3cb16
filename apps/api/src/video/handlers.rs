use axum::Json;
use tracing::info;

use crate::errors::AppError;
use crate::models::video::Video;
use crate::video::mock::{mock_video, GenerateVideoRequest};

/// POST /generate-video
///
/// Mocked: returns a sample video, a seeded placeholder thumbnail and fixed tags.
pub async fn handle_generate_video(
    Json(request): Json<GenerateVideoRequest>,
) -> Result<Json<Video>, AppError> {
    info!(
        scenes = request.script.scenes.len(),
        content_type = %request.content_type,
        "Returning mock video"
    );
    Ok(Json(mock_video(&request)?))
}
