// Document processing LLM prompt templates.

pub const SUMMARY_PROMPT_TEMPLATE: &str =
    "Summarize the following document in one or two sentences:\n\n{document}";

pub const CONTENT_TYPE_PROMPT_TEMPLATE: &str = r#"Analyze the combined content of the following documents and determine the most likely content type for a YouTube video.
Choose one from: {choices}.

Content:
{content}

Respond with only the content type name."#;
