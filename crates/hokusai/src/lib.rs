//! Hokusai - AI comic generation pipeline
//!
//! Hokusai turns a short creative brief (theme, optional story notes, page
//! count, optional character reference image) into a multi-page illustrated
//! comic: it drives one text-generation call to produce a story outline,
//! segments the outline into per-page instructions, renders each page
//! through a stateful multi-turn image conversation conditioned on the
//! previous page's artwork, and stacks the pages into one vertical strip.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hokusai::{gemini_director, ComicBrief, Language};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let director = gemini_director("./comic")?;
//!
//!     let brief = ComicBrief::builder()
//!         .theme("High school rom-com")
//!         .page_count(4u32)
//!         .language(Language::English)
//!         .build()?;
//!
//!     let comic = director.generate(&brief).await?;
//!     println!("Comic written to {}", comic.path().display());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Hokusai is organized as a workspace with focused crates:
//!
//! - `hokusai_core` - Core data types (briefs, parts, artifacts, phases)
//! - `hokusai_interface` - Capability traits for generation providers
//! - `hokusai_error` - Error types and retry classification
//! - `hokusai_script` - Plot instruction composer and page segmenter
//! - `hokusai_models` - Gemini provider implementations
//! - `hokusai_storage` - Durable page-image storage
//! - `hokusai_compose` - Vertical page compositing
//! - `hokusai_studio` - The run state machine
//!
//! This crate (`hokusai`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use hokusai_compose::combine_images_vertical;
pub use hokusai_core::{
    ComicArtifact, ComicBrief, ComicBriefBuilder, Language, MediaSource, PageArtifact, PageBlock,
    PageScript, Part, Phase, ReferenceImage, TurnPart, TurnResponse, NO_PREFERENCE,
};
pub use hokusai_error::{
    ComposeError, ComposeErrorKind, GeminiError, GeminiErrorKind, HokusaiError, HokusaiErrorKind,
    HokusaiResult, RetryableError, StorageError, StorageErrorKind, StudioError, StudioErrorKind,
};
pub use hokusai_interface::{
    AspectRatio, ImageSession, ImageSize, ImageStudio, NullProgress, PlotWriter, ProgressSink,
    SessionConfig, TracingProgress,
};
pub use hokusai_models::{GeminiImageSession, GeminiImageStudio, GeminiPlotWriter};
pub use hokusai_script::{plot_writer_instructions, split_pages};
pub use hokusai_storage::{FileSystemPageStore, PageStore};
pub use hokusai_studio::{ComicDirector, GenerationSession};

use std::path::PathBuf;

/// Wire the default Gemini pipeline over filesystem storage.
///
/// Page images and the combined strip are written under `output_dir`.
/// Reads the API key from the `GEMINI_API_KEY` environment variable.
pub fn gemini_director(
    output_dir: impl Into<PathBuf>,
) -> HokusaiResult<ComicDirector<GeminiPlotWriter, GeminiImageStudio, FileSystemPageStore>> {
    Ok(ComicDirector::new(
        GeminiPlotWriter::new()?,
        GeminiImageStudio::new()?,
        FileSystemPageStore::new(output_dir)?,
    ))
}
