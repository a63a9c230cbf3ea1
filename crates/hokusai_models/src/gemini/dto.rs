//! Gemini `generateContent` data transfer objects.
//!
//! Only the slice of the wire format the image conversation needs: text and
//! inline-data parts in both directions, plus the generation config that
//! pins response modality, aspect ratio, and image size for the whole
//! conversation.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One part of a content entry: text or inline media, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WirePart {
    /// Text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline media content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<WireInlineData>,
}

impl WirePart {
    /// A text part.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            inline_data: None,
        }
    }

    /// An inline media part carrying base64-encoded data.
    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(WireInlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Base64-encoded media with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireInlineData {
    /// MIME type, e.g. "image/png"
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// One conversation entry: a role plus its ordered parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireContent {
    /// "user" or "model"
    pub role: String,
    /// Ordered parts for this entry
    pub parts: Vec<WirePart>,
}

impl WireContent {
    /// A user-role entry.
    pub fn user(parts: Vec<WirePart>) -> Self {
        Self {
            role: "user".to_string(),
            parts,
        }
    }

    /// A model-role entry.
    pub fn model(parts: Vec<WirePart>) -> Self {
        Self {
            role: "model".to_string(),
            parts,
        }
    }
}

/// Image configuration pinned for the whole conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct WireImageConfig {
    /// Aspect ratio, e.g. "3:4"
    aspect_ratio: String,
    /// Resolution tier, e.g. "1K"
    image_size: String,
}

impl WireImageConfig {
    /// Create a new image config.
    pub fn new(aspect_ratio: impl Into<String>, image_size: impl Into<String>) -> Self {
        Self {
            aspect_ratio: aspect_ratio.into(),
            image_size: image_size.into(),
        }
    }
}

/// Generation configuration for image turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct WireGenerationConfig {
    /// Requested response modalities, e.g. `["IMAGE"]`
    response_modalities: Vec<String>,
    /// Per-conversation image configuration
    image_config: WireImageConfig,
}

impl WireGenerationConfig {
    /// Image-only output with the given image configuration.
    pub fn image_only(image_config: WireImageConfig) -> Self {
        Self {
            response_modalities: vec!["IMAGE".to_string()],
            image_config,
        }
    }
}

/// The `generateContent` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerateContentRequest {
    /// Full conversation so far, oldest first
    contents: Vec<WireContent>,
    /// Generation configuration
    generation_config: WireGenerationConfig,
}

impl GenerateContentRequest {
    /// Creates a new builder for `GenerateContentRequest`.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCandidate {
    /// The candidate's content, if any
    pub content: Option<WireCandidateContent>,
}

/// Content of a response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCandidateContent {
    /// The candidate's parts, if the service exposed any
    pub parts: Option<Vec<WirePart>>,
}

/// The `generateContent` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerateContentResponse {
    /// Response candidates, best first
    #[serde(default)]
    pub candidates: Option<Vec<WireCandidate>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateContentRequest::builder()
            .contents(vec![WireContent::user(vec![WirePart::text("[Page 1]")])])
            .generation_config(WireGenerationConfig::image_only(WireImageConfig::new(
                "3:4", "1K",
            )))
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "[Page 1]");
        assert_eq!(json["generationConfig"]["responseModalities"][0], "IMAGE");
        assert_eq!(json["generationConfig"]["imageConfig"]["aspectRatio"], "3:4");
        assert_eq!(json["generationConfig"]["imageConfig"]["imageSize"], "1K");
    }

    #[test]
    fn inline_data_parts_skip_text_field() {
        let part = WirePart::inline_data("image/png", "aGVsbG8=");
        let json = serde_json::to_value(&part).unwrap();
        assert!(json.get("text").is_none());
        assert_eq!(json["inlineData"]["mimeType"], "image/png");
        assert_eq!(json["inlineData"]["data"], "aGVsbG8=");
    }

    #[test]
    fn response_parses_inline_data() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here is page 1."},
                        {"inlineData": {"mimeType": "image/png", "data": "aW1n"}}
                    ]
                }
            }]
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        let candidates = response.candidates.unwrap();
        let parts = candidates[0].content.as_ref().unwrap().parts.as_ref().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].inline_data.as_ref().unwrap().mime_type, "image/png");
    }

    #[test]
    fn response_tolerates_missing_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_none());
    }
}
