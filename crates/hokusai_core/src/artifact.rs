//! Generated page and comic artifacts.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A generated, persisted image for one page.
///
/// Created exactly once per page, on the attempt that succeeds, and never
/// mutated afterward. The next page's generation step may reference this
/// artifact and only this artifact, never the full history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PageArtifact {
    /// The page this artifact renders
    page_number: u32,
    /// The raw image bytes as returned by the generation service
    data: Vec<u8>,
    /// Where the image was persisted
    path: PathBuf,
}

impl PageArtifact {
    /// Create a new page artifact.
    pub fn new(page_number: u32, data: Vec<u8>, path: impl Into<PathBuf>) -> Self {
        Self {
            page_number,
            data,
            path: path.into(),
        }
    }
}

/// The final vertically composited comic spanning all pages.
///
/// Exists only after every requested page succeeded; derived, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ComicArtifact {
    /// Where the combined strip was written
    path: PathBuf,
    /// The per-page artifacts, in page order
    pages: Vec<PageArtifact>,
}

impl ComicArtifact {
    /// Create a new comic artifact.
    pub fn new(path: impl Into<PathBuf>, pages: Vec<PageArtifact>) -> Self {
        Self {
            path: path.into(),
            pages,
        }
    }
}
