//! Trait definitions for generation providers.

use crate::SessionConfig;
use async_trait::async_trait;
use hokusai_core::{Part, TurnResponse};
use hokusai_error::HokusaiResult;

/// A text-generation backend that turns plot instructions into an outline.
///
/// One call per run; the orchestrator applies no retry at this stage, so a
/// failure here is fatal to the run.
#[async_trait]
pub trait PlotWriter: Send + Sync {
    /// Generate the full plot outline from the composed instruction text.
    async fn write_plot(&self, instructions: &str) -> HokusaiResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-3-pro-preview").
    fn model_name(&self) -> &str;
}

/// A stateful multi-turn conversation with an image-generation service.
///
/// The session accumulates prior turns as implicit context on the service
/// side; callers send only the delta for each turn. Sessions are exclusively
/// owned by one generation run and are not shared across runs.
#[async_trait]
pub trait ImageSession: Send {
    /// Send one turn of ordered parts and return the service's response.
    ///
    /// The response exposes zero or more parts, each optionally carrying
    /// inline image data; an empty or imageless response is reported as a
    /// retryable error by provider implementations.
    async fn send(&mut self, parts: Vec<Part>) -> HokusaiResult<TurnResponse>;
}

/// Factory for [`ImageSession`]s.
#[async_trait]
pub trait ImageStudio: Send + Sync {
    /// Open a new conversational context configured with a fixed aspect
    /// ratio and resolution tier.
    async fn open_session(&self, config: &SessionConfig) -> HokusaiResult<Box<dyn ImageSession>>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-3-pro-image-preview").
    fn model_name(&self) -> &str;
}
