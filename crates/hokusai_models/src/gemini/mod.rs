//! Google Gemini API implementations.

mod dto;
mod image_studio;
mod plot_writer;

pub use image_studio::{GeminiImageSession, GeminiImageStudio};
pub use plot_writer::GeminiPlotWriter;

use hokusai_error::GeminiError;

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, GeminiError>;
