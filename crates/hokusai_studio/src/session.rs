//! Per-run mutable state.

use hokusai_core::{PageArtifact, ReferenceImage};
use hokusai_interface::ImageSession;

/// Mutable state scoped to one end-to-end generation run.
///
/// Owns the conversational context with the image service (created once,
/// reused across all pages), the append-only sequence of completed page
/// artifacts in page order, and the optional character reference used only
/// while generating page 1. Nothing outside the director mutates a session;
/// concurrent runs each get their own.
pub struct GenerationSession {
    conversation: Box<dyn ImageSession>,
    artifacts: Vec<PageArtifact>,
    reference_image: Option<ReferenceImage>,
}

impl std::fmt::Debug for GenerationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationSession")
            .field("artifacts", &self.artifacts.len())
            .field("has_reference", &self.reference_image.is_some())
            .finish_non_exhaustive()
    }
}

impl GenerationSession {
    /// Create a session around a freshly opened conversation.
    pub fn new(
        conversation: Box<dyn ImageSession>,
        reference_image: Option<ReferenceImage>,
    ) -> Self {
        Self {
            conversation,
            artifacts: Vec::new(),
            reference_image,
        }
    }

    /// Mutable access to the conversational context.
    pub fn conversation_mut(&mut self) -> &mut dyn ImageSession {
        self.conversation.as_mut()
    }

    /// Completed page artifacts, in page order.
    pub fn artifacts(&self) -> &[PageArtifact] {
        &self.artifacts
    }

    /// The most recently completed page, if any.
    pub fn last_artifact(&self) -> Option<&PageArtifact> {
        self.artifacts.last()
    }

    /// The character reference supplied for page 1, if any.
    pub fn reference_image(&self) -> Option<&ReferenceImage> {
        self.reference_image.as_ref()
    }

    /// Append a completed page. Artifacts are immutable once appended.
    pub fn push_artifact(&mut self, artifact: PageArtifact) {
        self.artifacts.push(artifact);
    }

    /// Consume the session, returning the completed artifacts.
    pub fn into_artifacts(self) -> Vec<PageArtifact> {
        self.artifacts
    }
}
