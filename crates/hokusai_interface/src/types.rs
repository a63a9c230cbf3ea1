//! Configuration types for image sessions.

use serde::{Deserialize, Serialize};

/// Aspect ratio for generated page images.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum AspectRatio {
    /// 1:1 square
    #[display("1:1")]
    Square,
    /// 3:4 portrait, the standard comic page shape
    #[default]
    #[display("3:4")]
    Portrait3x4,
    /// 4:3 landscape
    #[display("4:3")]
    Landscape4x3,
    /// 9:16 tall portrait
    #[display("9:16")]
    Portrait9x16,
}

impl AspectRatio {
    /// Wire representation expected by generation services.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Portrait9x16 => "9:16",
        }
    }
}

/// Resolution tier for generated page images.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum ImageSize {
    /// ~1024px on the long edge
    #[default]
    #[display("1K")]
    OneK,
    /// ~2048px on the long edge
    #[display("2K")]
    TwoK,
}

impl ImageSize {
    /// Wire representation expected by generation services.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
        }
    }
}

/// Configuration for one image conversation.
///
/// # Examples
///
/// ```
/// use hokusai_interface::{AspectRatio, ImageSize, SessionConfig};
///
/// let config = SessionConfig::builder().build().unwrap();
/// assert_eq!(config.aspect_ratio().as_str(), "3:4");
/// assert_eq!(config.image_size().as_str(), "1K");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), default)]
pub struct SessionConfig {
    /// Aspect ratio applied to every image in the conversation
    aspect_ratio: AspectRatio,
    /// Resolution tier applied to every image in the conversation
    image_size: ImageSize,
}

impl SessionConfig {
    /// Creates a new builder for `SessionConfig`.
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }
}
