//! Multimodal request parts sent to generation services.

use serde::{Deserialize, Serialize};

/// Where media content is sourced from.
///
/// # Examples
///
/// ```
/// use hokusai_core::MediaSource;
///
/// let base64 = MediaSource::Base64("iVBORw0KGgo...".to_string());
/// let binary = MediaSource::Binary(vec![0x89, 0x50, 0x4E, 0x47]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    /// Base64-encoded content
    Base64(String),
    /// Raw binary data
    Binary(Vec<u8>),
}

/// One part of a conversational turn sent to an image generation service.
///
/// A turn is an ordered list of parts. Text parts carry page instructions;
/// image parts carry the character reference or the previous page's artwork.
///
/// # Examples
///
/// ```
/// use hokusai_core::{MediaSource, Part};
///
/// let text = Part::Text("[Page 1]\nA quiet classroom at dawn.".to_string());
/// let image = Part::Image {
///     mime: Some("image/png".to_string()),
///     source: MediaSource::Binary(vec![0x89, 0x50, 0x4E, 0x47]),
/// };
/// assert_ne!(text, image);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Part {
    /// Plain text part.
    Text(String),

    /// Image part (PNG, JPEG, WebP, etc.).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source (base64 or raw bytes)
        source: MediaSource,
    },
}

impl Part {
    /// Convenience constructor for a text part.
    pub fn text(content: impl Into<String>) -> Self {
        Part::Text(content.into())
    }

    /// Convenience constructor for a PNG image part from raw bytes.
    pub fn png(data: Vec<u8>) -> Self {
        Part::Image {
            mime: Some("image/png".to_string()),
            source: MediaSource::Binary(data),
        }
    }
}
