//! Orchestration error types.

/// Specific error conditions for comic generation runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StudioErrorKind {
    /// Theme is empty or contains only whitespace
    #[display("Theme must not be empty")]
    EmptyTheme,
    /// Requested page count falls outside the supported range
    #[display("Page count {} is out of range (1-7)", requested)]
    PageCountOutOfRange {
        /// The page count the caller asked for
        requested: u32,
    },
    /// The generated plot is missing a block for a required page
    #[display("Generated plot has no block for page {}", page)]
    MissingPage {
        /// The page number with no segmented block
        page: u32,
    },
    /// A page exhausted its retry budget or hit a permanent error
    #[display("Failed to generate page {} after {} attempt(s): {}", page, attempts, cause)]
    PageFailed {
        /// The page that failed
        page: u32,
        /// How many attempts were made before giving up
        attempts: u32,
        /// Rendered message of the underlying generation error
        cause: String,
    },
    /// Completed artifact count does not match the requested page count
    #[display("Expected {} pages but only generated {}", expected, actual)]
    PageCountMismatch {
        /// Pages the caller requested
        expected: u32,
        /// Artifacts actually produced
        actual: u32,
    },
}

/// Orchestration error with location tracking.
///
/// # Examples
///
/// ```
/// use hokusai_error::{StudioError, StudioErrorKind};
///
/// let err = StudioError::new(StudioErrorKind::MissingPage { page: 3 });
/// assert!(format!("{}", err).contains("page 3"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Studio Error: {} at line {} in {}", kind, line, file)]
pub struct StudioError {
    /// The specific error condition
    pub kind: StudioErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StudioError {
    /// Create a new StudioError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
