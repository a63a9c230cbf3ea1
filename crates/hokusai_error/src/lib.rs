//! Error types for the Hokusai library.
//!
//! This crate provides the foundation error types used throughout the Hokusai
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Retry eligibility is expressed through the [`RetryableError`] trait as a
//! closed set of variants, so the retry boundary in the orchestrator stays
//! precise and testable without a live service.
//!
//! # Examples
//!
//! ```
//! use hokusai_error::{HokusaiResult, StudioError, StudioErrorKind};
//!
//! fn start_run(theme: &str) -> HokusaiResult<()> {
//!     if theme.trim().is_empty() {
//!         Err(StudioError::new(StudioErrorKind::EmptyTheme))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(start_run("  ").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compose;
mod error;
mod gemini;
mod storage;
mod studio;

pub use compose::{ComposeError, ComposeErrorKind};
pub use error::{HokusaiError, HokusaiErrorKind, HokusaiResult};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use storage::{StorageError, StorageErrorKind};
pub use studio::{StudioError, StudioErrorKind};
