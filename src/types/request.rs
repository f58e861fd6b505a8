//! Outgoing request payloads.

use base64::Engine as _;
use serde::Serialize;
use std::path::Path;

/// Payload for `POST /chat`.
///
/// Absent optional fields are omitted from the JSON entirely, never sent as
/// null: the gateway distinguishes "use the default project" from "use this
/// project" by field presence.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            project_url: None,
            images: None,
        }
    }

    pub fn with_project_url(mut self, url: impl Into<String>) -> Self {
        self.project_url = Some(url.into());
        self
    }

    /// Attach base64-encoded images. An empty list is treated as absent.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = if images.is_empty() {
            None
        } else {
            Some(images)
        };
        self
    }
}

/// Read a file and base64-encode it for the `images` payload field.
pub fn encode_image(path: impl AsRef<Path>) -> crate::Result<String> {
    let bytes = std::fs::read(path.as_ref())?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_url_omitted_when_absent() {
        let request = ChatRequest::new("What is AI?");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["prompt"], "What is AI?");
        assert!(json.get("project_url").is_none());
        assert!(json.get("images").is_none());
    }

    #[test]
    fn test_project_url_included_verbatim() {
        let request = ChatRequest::new("Hello")
            .with_project_url("https://imagine.example.ai/chat/p1/foundational");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["project_url"],
            "https://imagine.example.ai/chat/p1/foundational"
        );
    }

    #[test]
    fn test_empty_image_list_treated_as_absent() {
        let request = ChatRequest::new("Hello").with_images(Vec::new());
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("images").is_none());
    }

    #[test]
    fn test_images_serialized_in_order() {
        let request = ChatRequest::new("Describe these")
            .with_images(vec!["aGVsbG8=".to_string(), "d29ybGQ=".to_string()]);
        let json = serde_json::to_value(&request).unwrap();
        let images = json["images"].as_array().unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0], "aGVsbG8=");
        assert_eq!(images[1], "d29ybGQ=");
    }

    #[test]
    fn test_encode_image_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("gateway-client-encode-test.bin");
        std::fs::write(&path, b"hello").unwrap();
        let encoded = encode_image(&path).unwrap();
        assert_eq!(encoded, "aGVsbG8=");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_encode_image_missing_file() {
        let result = encode_image("/nonexistent/image.png");
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
