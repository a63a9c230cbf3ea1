//! Core data types for the Hokusai comic generation library.
//!
//! This crate provides the foundation data types used across the Hokusai
//! workspace: the multimodal parts exchanged with generation services, the
//! segmented page script, generated page artifacts, the caller-facing comic
//! brief, and the run phases reported to progress observers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod brief;
mod language;
mod page;
mod part;
mod phase;
mod turn;

pub use artifact::{ComicArtifact, PageArtifact};
pub use brief::{ComicBrief, ComicBriefBuilder, ReferenceImage, NO_PREFERENCE};
pub use language::Language;
pub use page::{page_key, PageBlock, PageScript};
pub use part::{MediaSource, Part};
pub use phase::Phase;
pub use turn::{TurnPart, TurnResponse};
