//! Static stand-in for a rendering pipeline.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use url::Url;

use crate::models::script::Script;
use crate::models::video::Video;

pub const SAMPLE_VIDEO_URL: &str =
    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";
const THUMBNAIL_BASE: &str = "https://picsum.photos/seed";
const THUMBNAIL_SIZE: (&str, &str) = ("1280", "720");
/// Leading characters of the script used as the placeholder-image seed.
pub const THUMBNAIL_SEED_CHARS: usize = 20;
pub const AI_GENERATED_TAG: &str = "AI Generated";

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateVideoRequest {
    pub script: Script,
    #[serde(rename = "contentType", alias = "content_type")]
    pub content_type: String,
}

/// `https://picsum.photos/seed/{first 20 chars of raw}/1280/720`, seed percent-encoded.
pub fn thumbnail_url(raw: &str) -> Result<String> {
    let seed: String = raw.chars().take(THUMBNAIL_SEED_CHARS).collect();
    let mut url = Url::parse(THUMBNAIL_BASE)?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("thumbnail base URL cannot take path segments"))?
        .push(&seed)
        .push(THUMBNAIL_SIZE.0)
        .push(THUMBNAIL_SIZE.1);
    Ok(url.into())
}

pub fn mock_video(request: &GenerateVideoRequest) -> Result<Video> {
    Ok(Video {
        url: SAMPLE_VIDEO_URL.to_string(),
        thumbnail_url: thumbnail_url(&request.script.raw)?,
        tags: vec![
            AI_GENERATED_TAG.to_string(),
            "Demo".to_string(),
            request.content_type.clone(),
            "FastAPI".to_string(),
            "React Native".to_string(),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(raw: &str, content_type: &str) -> GenerateVideoRequest {
        GenerateVideoRequest {
            script: Script {
                raw: raw.to_string(),
                scenes: vec![],
            },
            content_type: content_type.to_string(),
        }
    }

    #[test]
    fn test_thumbnail_seed_is_first_twenty_chars() {
        assert_eq!(
            thumbnail_url("HelloWorldHelloWorldIGNORED").unwrap(),
            "https://picsum.photos/seed/HelloWorldHelloWorld/1280/720"
        );
    }

    #[test]
    fn test_thumbnail_depends_only_on_prefix() {
        let a = thumbnail_url("Welcome to the channel! Today we cook.").unwrap();
        let b = thumbnail_url("Welcome to the channel! Tomorrow we bake.").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, thumbnail_url("Goodbye").unwrap());
    }

    #[test]
    fn test_thumbnail_seed_is_percent_encoded() {
        assert_eq!(
            thumbnail_url("A/B test? #1 100%").unwrap(),
            "https://picsum.photos/seed/A%2FB%20test%3F%20%231%20100%25/1280/720"
        );
    }

    #[test]
    fn test_short_or_empty_raw_still_yields_url() {
        assert_eq!(
            thumbnail_url("").unwrap(),
            "https://picsum.photos/seed//1280/720"
        );
        assert_eq!(
            thumbnail_url("héllo").unwrap(),
            "https://picsum.photos/seed/h%C3%A9llo/1280/720"
        );
    }

    #[test]
    fn test_tags_include_marker_and_content_type() {
        let video = mock_video(&request("raw", "Documentary")).unwrap();
        assert_eq!(video.url, SAMPLE_VIDEO_URL);
        assert!(video.tags.iter().any(|t| t == AI_GENERATED_TAG));
        assert!(video.tags.iter().any(|t| t == "Documentary"));
        assert_eq!(video.tags.len(), 5);
        assert_eq!(video.tags[3], "FastAPI");
    }

    #[test]
    fn test_request_accepts_both_content_type_spellings() {
        let camel = r#"{"script": {"raw": "r", "scenes": []}, "contentType": "Listicle"}"#;
        let snake = r#"{"script": {"raw": "r", "scenes": []}, "content_type": "Listicle"}"#;
        for body in [camel, snake] {
            let parsed: GenerateVideoRequest = serde_json::from_str(body).unwrap();
            assert_eq!(parsed.content_type, "Listicle");
        }
    }
}
