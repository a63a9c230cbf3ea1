//! Page generation orchestration for Hokusai.
//!
//! This crate owns the run state machine: compose plot instructions, call
//! the plot writer once, segment the outline, drive the sequential page
//! loop through one stateful image conversation, and composite the final
//! strip. Each page's request references only the immediately preceding
//! page's artwork, never the full history; that bound is deliberate and
//! keeps request size flat while anchoring local continuity.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod director;
mod session;

pub use director::ComicDirector;
pub use session::GenerationSession;
