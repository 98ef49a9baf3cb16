use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub url: String,
    pub thumbnail_url: String,
    pub tags: Vec<String>,
}
