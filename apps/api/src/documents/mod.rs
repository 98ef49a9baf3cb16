// Document processing: per-file summaries plus one content-type classification.
// All LLM calls go through the `TextGenerator` in AppState.

pub mod content_type;
pub mod extract;
pub mod handlers;
pub mod processor;
pub mod prompts;
