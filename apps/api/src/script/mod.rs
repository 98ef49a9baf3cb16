// Script generation: one LLM call turning project context into a scene-by-scene script.

pub mod generator;
pub mod handlers;
pub mod prompts;
