//! Filesystem-based page storage implementation.

use crate::PageStore;
use hokusai_error::{HokusaiResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Filesystem storage backend.
///
/// Stores page images flat under a base directory:
/// `{base}/page{n}_image.png` per page and `{base}/{n}_page_comic.png` for
/// the combined strip.
pub struct FileSystemPageStore {
    base_path: PathBuf,
}

impl FileSystemPageStore {
    /// Create a new filesystem page store.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> HokusaiResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem page store");
        Ok(Self { base_path })
    }

    /// The base directory pages are stored under.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl PageStore for FileSystemPageStore {
    #[tracing::instrument(skip(self, data), fields(page = page_number, size = data.len()))]
    async fn save_page(&self, page_number: u32, data: &[u8]) -> HokusaiResult<PathBuf> {
        let path = self.page_path(page_number);

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(
            page = page_number,
            path = %path.display(),
            size = data.len(),
            "Stored page image"
        );

        Ok(path)
    }

    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn load(&self, path: &Path) -> HokusaiResult<Vec<u8>> {
        let data = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        tracing::debug!(path = %path.display(), size = data.len(), "Loaded page image");
        Ok(data)
    }

    fn page_path(&self, page_number: u32) -> PathBuf {
        self.base_path.join(format!("page{}_image.png", page_number))
    }

    fn comic_path(&self, page_count: u32) -> PathBuf {
        self.base_path.join(format!("{}_page_comic.png", page_count))
    }
}
