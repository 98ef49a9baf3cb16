use serde::{Deserialize, Serialize};

/// One narration/visual unit of a script. Index ordering and uniqueness are not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub scene: i64,
    pub text: String,
    pub visual: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub raw: String,
    pub scenes: Vec<Scene>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_requires_raw_and_scenes() {
        assert!(serde_json::from_str::<Script>(r#"{"raw": "x"}"#).is_err());
        assert!(serde_json::from_str::<Script>(r#"{"scenes": []}"#).is_err());
    }

    #[test]
    fn test_scene_rejects_non_integer_index() {
        let json = r#"{"scene": "one", "text": "t", "visual": "v"}"#;
        assert!(serde_json::from_str::<Scene>(json).is_err());
    }
}
