//! Top-level error wrapper types.

use crate::{ComposeError, GeminiError, StorageError, StudioError};

/// This is the foundation error enum. Each variant wraps the error type of
/// one Hokusai crate.
///
/// # Examples
///
/// ```
/// use hokusai_error::{HokusaiError, GeminiError, GeminiErrorKind};
///
/// let gemini_err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// let err: HokusaiError = gemini_err.into();
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HokusaiErrorKind {
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Page image storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Image compositing error
    #[from(ComposeError)]
    Compose(ComposeError),
    /// Orchestration error
    #[from(StudioError)]
    Studio(StudioError),
}

/// Hokusai error with kind discrimination.
///
/// # Examples
///
/// ```
/// use hokusai_error::{HokusaiResult, StudioError, StudioErrorKind};
///
/// fn might_fail() -> HokusaiResult<()> {
///     Err(StudioError::new(StudioErrorKind::PageCountOutOfRange { requested: 12 }))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Hokusai Error: {}", _0)]
pub struct HokusaiError(Box<HokusaiErrorKind>);

impl HokusaiError {
    /// Create a new error from a kind.
    pub fn new(kind: HokusaiErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HokusaiErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to HokusaiErrorKind
impl<T> From<T> for HokusaiError
where
    T: Into<HokusaiErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Hokusai operations.
///
/// # Examples
///
/// ```
/// use hokusai_error::{HokusaiResult, StorageError, StorageErrorKind};
///
/// fn load_page() -> HokusaiResult<Vec<u8>> {
///     Err(StorageError::new(StorageErrorKind::NotFound("page1_image.png".into())))?
/// }
/// ```
pub type HokusaiResult<T> = std::result::Result<T, HokusaiError>;

impl crate::RetryableError for HokusaiError {
    /// Only classified Gemini generation failures are ever retryable; every
    /// other domain (preconditions, storage, compositing) is fatal on first
    /// occurrence.
    fn is_retryable(&self) -> bool {
        match self.kind() {
            HokusaiErrorKind::Gemini(e) => e.kind.is_retryable(),
            _ => false,
        }
    }
}
