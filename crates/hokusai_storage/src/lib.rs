//! Durable page-image storage for Hokusai.
//!
//! Page images are handed between loop iterations and to the compositor
//! through stable storage rather than in memory alone: each completed page
//! is persisted under a name derived from its page number before the next
//! page's generation starts.
//!
//! # Example
//!
//! ```rust
//! use hokusai_storage::{FileSystemPageStore, PageStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileSystemPageStore::new("/tmp/comic")?;
//!
//! let path = store.save_page(1, &[0x89, 0x50, 0x4E, 0x47]).await?;
//! let bytes = store.load(&path).await?;
//! assert_eq!(bytes, vec![0x89, 0x50, 0x4E, 0x47]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod store;

pub use filesystem::FileSystemPageStore;
pub use hokusai_error::{StorageError, StorageErrorKind};
pub use store::PageStore;
