//! Capability traits for Hokusai generation providers.
//!
//! This crate defines the seams between the orchestration core and its
//! external collaborators. Any concrete provider satisfying these traits is
//! substitutable: the orchestrator depends on nothing beyond "generate text
//! from instructions" and "advance a stateful image conversation with
//! parts, where responses may carry inline image data".

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod progress;
mod traits;
mod types;

pub use progress::{NullProgress, ProgressSink, TracingProgress};
pub use traits::{ImageSession, ImageStudio, PlotWriter};
pub use types::{AspectRatio, ImageSize, SessionConfig, SessionConfigBuilder};
