//! The closed set of video content types the classifier chooses from.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    Tutorial,
    Documentary,
    Commentary,
    #[serde(rename = "Code Walkthrough")]
    CodeWalkthrough,
    Presentation,
    Listicle,
    #[serde(rename = "News Report")]
    NewsReport,
    #[serde(rename = "Story Narration")]
    StoryNarration,
}

impl ContentType {
    pub const ALL: [ContentType; 8] = [
        ContentType::Tutorial,
        ContentType::Documentary,
        ContentType::Commentary,
        ContentType::CodeWalkthrough,
        ContentType::Presentation,
        ContentType::Listicle,
        ContentType::NewsReport,
        ContentType::StoryNarration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContentType::Tutorial => "Tutorial",
            ContentType::Documentary => "Documentary",
            ContentType::Commentary => "Commentary",
            ContentType::CodeWalkthrough => "Code Walkthrough",
            ContentType::Presentation => "Presentation",
            ContentType::Listicle => "Listicle",
            ContentType::NewsReport => "News Report",
            ContentType::StoryNarration => "Story Narration",
        }
    }

    /// Matches a model answer against the labels, ignoring case and wrapping quotes or periods.
    pub fn from_label(answer: &str) -> Option<Self> {
        let cleaned = answer
            .trim()
            .trim_matches(|c: char| matches!(c, '\'' | '"' | '`' | '.' | '*'))
            .trim();
        Self::ALL
            .into_iter()
            .find(|ct| ct.label().eq_ignore_ascii_case(cleaned))
    }

    /// `'Tutorial', 'Documentary', ...` for embedding in the classification prompt.
    pub fn prompt_choices() -> String {
        Self::ALL
            .iter()
            .map(|ct| format!("'{}'", ct.label()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Canonical label when the answer names a known type, otherwise the trimmed answer verbatim.
pub fn normalize_content_type(answer: &str) -> String {
    match ContentType::from_label(answer) {
        Some(ct) => ct.label().to_string(),
        None => answer.trim().to_string(),
    }
}
