//! Compositing error types.

/// Specific error conditions for the image compositor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ComposeErrorKind {
    /// No input images were supplied
    #[display("No image files specified for combining")]
    NoImages,
    /// Failed to open or decode an input image
    #[display("Failed to open image '{}': {}", path, message)]
    ImageOpen {
        /// Path of the offending input
        path: String,
        /// Decoder error message
        message: String,
    },
    /// Failed to encode or write the combined image
    #[display("Failed to write combined image '{}': {}", path, message)]
    ImageWrite {
        /// Intended output path
        path: String,
        /// Encoder or filesystem error message
        message: String,
    },
}

/// Compositing error with location tracking.
///
/// # Examples
///
/// ```
/// use hokusai_error::{ComposeError, ComposeErrorKind};
///
/// let err = ComposeError::new(ComposeErrorKind::NoImages);
/// assert!(format!("{}", err).contains("No image files"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Compose Error: {} at line {} in {}", kind, line, file)]
pub struct ComposeError {
    /// The kind of error that occurred
    pub kind: ComposeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ComposeError {
    /// Create a new compositing error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ComposeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
