//! Storage trait definition.

use hokusai_error::HokusaiResult;
use std::path::{Path, PathBuf};

/// Trait for durable page-image storage backends.
///
/// Implementations persist page images under names derived from their page
/// number and hand them back by path. The orchestrator saves each page on
/// the attempt that succeeds and reads the previous page back when building
/// the next page's request.
#[async_trait::async_trait]
pub trait PageStore: Send + Sync {
    /// Persist one page image and return the path it was written to.
    ///
    /// # Arguments
    ///
    /// * `page_number` - 1-based page number; determines the file name
    /// * `data` - raw image bytes as returned by the generation service
    async fn save_page(&self, page_number: u32, data: &[u8]) -> HokusaiResult<PathBuf>;

    /// Read an image back by path.
    async fn load(&self, path: &Path) -> HokusaiResult<Vec<u8>>;

    /// The path a page image would be stored under.
    fn page_path(&self, page_number: u32) -> PathBuf;

    /// The path the combined comic strip is written to.
    fn comic_path(&self, page_count: u32) -> PathBuf;
}
