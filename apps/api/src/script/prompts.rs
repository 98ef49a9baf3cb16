// Script generation LLM prompt templates.

pub const SCRIPT_PROMPT_TEMPLATE: &str = r#"You are a professional YouTube scriptwriter. Your task is to create a compelling video script based on the provided documents.

Project Name: "{project_name}"
Video Content Type: "{content_type}"
Source Document Summaries:
{file_summaries}

Instructions:
1. Write a script that is engaging, clear, and optimized for YouTube.
2. The script should have a hook, main content, and a conclusion with a call to action.
3. For each scene, provide the narration text and a simple, clear visual suggestion (e.g., "A-roll of speaker", "B-roll of code on screen", "Animated graphic of a chart").
4. Return the response as a single, valid JSON object with two keys: "raw" (the full script as a single string) and "scenes" (a list of objects, each with "scene", "text", and "visual" keys).

Example JSON format:
{
  "raw": "The entire script text goes here...",
  "scenes": [
    {"scene": 1, "text": "Hello and welcome!", "visual": "Presenter smiling at the camera."},
    {"scene": 2, "text": "Today we're talking about...", "visual": "Title card with the video topic."}
  ]
}"#;
