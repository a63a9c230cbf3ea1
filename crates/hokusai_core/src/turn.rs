//! Response parts returned from an image generation turn.

use serde::{Deserialize, Serialize};

/// One part of a generation response.
///
/// Providers may interleave commentary text with generated images; the
/// orchestrator only cares about the first part carrying inline image data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TurnPart {
    /// Plain text output.
    Text(String),

    /// Generated image output with inline data.
    Image {
        /// MIME type of the image
        mime: Option<String>,
        /// Binary image data
        data: Vec<u8>,
    },
}

impl TurnPart {
    /// Inline image bytes, if this part carries any.
    pub fn inline_image(&self) -> Option<&[u8]> {
        match self {
            TurnPart::Image { data, .. } => Some(data),
            TurnPart::Text(_) => None,
        }
    }
}

/// The response to one conversational turn.
///
/// # Examples
///
/// ```
/// use hokusai_core::{TurnPart, TurnResponse};
///
/// let response = TurnResponse {
///     parts: vec![
///         TurnPart::Text("Here is the page.".to_string()),
///         TurnPart::Image { mime: Some("image/png".to_string()), data: vec![1, 2, 3] },
///     ],
/// };
/// assert_eq!(response.first_image(), Some(&[1u8, 2, 3][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResponse {
    /// The parts returned by the model, in response order
    pub parts: Vec<TurnPart>,
}

impl TurnResponse {
    /// The first part carrying inline image data, if any.
    pub fn first_image(&self) -> Option<&[u8]> {
        self.parts.iter().find_map(TurnPart::inline_image)
    }
}
