//! The caller-facing creative brief.

use crate::Language;
use serde::{Deserialize, Serialize};

/// Sentinel value for "no story preference" in [`ComicBrief::extra_content`].
///
/// Matching is case- and surrounding-whitespace-insensitive; use
/// [`is_no_preference`](ComicBrief::is_no_preference) rather than comparing
/// directly.
pub const NO_PREFERENCE: &str = "up to you";

/// A character design reference supplied by the caller, used only while
/// generating page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ReferenceImage {
    /// MIME type of the reference, e.g. "image/png"
    mime_type: String,
    /// Raw image bytes
    data: Vec<u8>,
}

impl ReferenceImage {
    /// Create a new reference image.
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }
}

/// The creative brief for one comic generation run.
///
/// # Examples
///
/// ```
/// use hokusai_core::{ComicBrief, Language};
///
/// let brief = ComicBrief::builder()
///     .theme("High school rom-com")
///     .page_count(4u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(brief.page_count(), &4);
/// assert_eq!(brief.language(), &Language::English);
/// assert!(brief.is_no_preference());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct ComicBrief {
    /// Theme or genre of the comic, e.g. "sci-fi adventure"
    theme: String,
    /// Extra story elements to incorporate, or [`NO_PREFERENCE`]
    #[builder(default = "NO_PREFERENCE.to_string()")]
    extra_content: String,
    /// Number of pages to generate (1-7)
    #[builder(default = "4")]
    page_count: u32,
    /// Language for all dialogue, narration, and prompts
    #[builder(default)]
    language: Language,
    /// Optional character design reference, used for page 1 only
    #[builder(default)]
    reference_image: Option<ReferenceImage>,
}

impl ComicBrief {
    /// Creates a new builder for `ComicBrief`.
    pub fn builder() -> ComicBriefBuilder {
        ComicBriefBuilder::default()
    }

    /// Whether the extra content is the "no preference" sentinel.
    pub fn is_no_preference(&self) -> bool {
        self.extra_content.trim().eq_ignore_ascii_case(NO_PREFERENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let brief = ComicBrief::builder().theme("Horror").build().unwrap();
        assert_eq!(brief.extra_content(), NO_PREFERENCE);
        assert_eq!(brief.page_count(), &4);
        assert!(brief.reference_image().is_none());
    }

    #[test]
    fn sentinel_is_case_and_whitespace_insensitive() {
        let brief = ComicBrief::builder()
            .theme("Horror")
            .extra_content("  Up To You ")
            .build()
            .unwrap();
        assert!(brief.is_no_preference());

        let brief = ComicBrief::builder()
            .theme("Horror")
            .extra_content("the protagonist loves cats")
            .build()
            .unwrap();
        assert!(!brief.is_no_preference());
    }
}
