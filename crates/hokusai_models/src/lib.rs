//! Gemini provider implementations for Hokusai.
//!
//! Two concrete providers live here:
//! - [`GeminiPlotWriter`] drives the text model through the `gemini-rust`
//!   SDK's builder API.
//! - [`GeminiImageStudio`] drives the image model through a small REST
//!   client, because the SDK's builder does not expose image response
//!   modalities or per-conversation image configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{GeminiImageSession, GeminiImageStudio, GeminiPlotWriter};
