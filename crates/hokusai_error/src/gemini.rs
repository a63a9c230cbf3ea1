//! Gemini-specific error types and retry classification.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create Gemini client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// API request failed
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The service returned no response body or no candidates
    #[display("Gemini returned an empty response")]
    EmptyResponse,
    /// The response candidate carried no usable parts collection
    #[display("Gemini response has no parts")]
    MissingParts,
    /// No part of the response carried inline image data
    #[display("No image data found in Gemini response")]
    NoImageData,
    /// Base64 decoding failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

impl GeminiErrorKind {
    /// Check if this error condition should be retried.
    ///
    /// Only malformed-response shapes are retryable: an empty response, a
    /// candidate without parts, or parts without inline image data. The
    /// model occasionally answers an image turn with text or nothing, and
    /// re-issuing the turn usually recovers. Everything else (auth, HTTP
    /// transport, decode failures) is permanent.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::EmptyResponse
                | GeminiErrorKind::MissingParts
                | GeminiErrorKind::NoImageData
        )
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use hokusai_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// The page-generation loop consults this trait to decide whether a failed
/// image turn may be re-issued. Implementations must keep the retryable set
/// closed: a variant is either always retryable or never, so the retry
/// boundary can be tested in isolation from the live service.
///
/// # Examples
///
/// ```
/// use hokusai_error::{GeminiError, GeminiErrorKind, RetryableError};
///
/// let empty = GeminiError::new(GeminiErrorKind::EmptyResponse);
/// assert!(empty.is_retryable());
///
/// let http = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 401,
///     message: "unauthorized".to_string(),
/// });
/// assert!(!http.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for GeminiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
