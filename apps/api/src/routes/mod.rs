pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::documents::handlers::handle_process_documents;
use crate::script::handlers::handle_generate_script;
use crate::state::AppState;
use crate::video::handlers::handle_generate_video;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/process-documents",
            post(handle_process_documents).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/generate-script", post(handle_generate_script))
        .route("/generate-video", post(handle_generate_video))
        .with_state(state)
}
