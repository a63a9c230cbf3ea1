//! The run state machine.

use crate::GenerationSession;
use hokusai_compose::combine_images_vertical;
use hokusai_core::{
    ComicArtifact, ComicBrief, MediaSource, PageArtifact, PageScript, Part, Phase,
};
use hokusai_error::{
    GeminiError, GeminiErrorKind, HokusaiResult, RetryableError, StudioError, StudioErrorKind,
};
use hokusai_interface::{
    ImageStudio, NullProgress, PlotWriter, ProgressSink, SessionConfig,
};
use hokusai_script::{plot_writer_instructions, split_pages};
use hokusai_storage::PageStore;
use std::path::PathBuf;

/// Attempt ceiling per page. Exhausting it fails the whole run.
const MAX_ATTEMPTS: u32 = 3;

/// Supported page count range upper bound.
const MAX_PAGES: u32 = 7;

/// Text part prepended to page 1 when a character reference is supplied.
const REFERENCE_USAGE_INSTRUCTION: &str =
    "Use this character design as a reference for the main character(s) in the manga.";

/// Drives one comic generation run from brief to composited strip.
///
/// The run advances through `GeneratingOutline → Segmenting →
/// GeneratingPage(1..=N) → Compositing → Done`; any failure aborts the
/// whole run, there is no partial-success mode. Pages are generated
/// strictly in order because each page's request attaches the previous
/// page's rendered image.
///
/// The plot call is made once with no retry; each page gets up to
/// [`MAX_ATTEMPTS`] attempts, but only for the closed set of retryable
/// generation errors. The asymmetry mirrors the behavior this pipeline
/// was built around and is intentional.
///
/// # Example
///
/// ```rust,ignore
/// use hokusai_core::ComicBrief;
/// use hokusai_models::{GeminiImageStudio, GeminiPlotWriter};
/// use hokusai_storage::FileSystemPageStore;
/// use hokusai_studio::ComicDirector;
///
/// let director = ComicDirector::new(
///     GeminiPlotWriter::new()?,
///     GeminiImageStudio::new()?,
///     FileSystemPageStore::new("./comic")?,
/// );
/// let brief = ComicBrief::builder().theme("Sci-fi adventure").build()?;
/// let comic = director.generate(&brief).await?;
/// ```
pub struct ComicDirector<W, S, P>
where
    W: PlotWriter,
    S: ImageStudio,
    P: PageStore,
{
    plot_writer: W,
    image_studio: S,
    store: P,
    progress: Box<dyn ProgressSink>,
    session_config: SessionConfig,
}

impl<W, S, P> ComicDirector<W, S, P>
where
    W: PlotWriter,
    S: ImageStudio,
    P: PageStore,
{
    /// Create a new director over the given collaborators.
    ///
    /// Progress updates are discarded unless a sink is attached with
    /// [`with_progress`](Self::with_progress).
    pub fn new(plot_writer: W, image_studio: S, store: P) -> Self {
        Self {
            plot_writer,
            image_studio,
            store,
            progress: Box::new(NullProgress),
            session_config: SessionConfig::default(),
        }
    }

    /// Attach a progress observer.
    ///
    /// The sink receives a status line and a monotonically non-decreasing
    /// percentage at every phase transition. It is purely observational.
    pub fn with_progress(mut self, progress: Box<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Override the image conversation configuration.
    pub fn with_session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Run one end-to-end generation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The brief fails its preconditions (empty theme, page count outside 1-7)
    /// - The plot call fails or the outline is missing a requested page
    /// - Any page exhausts its retry budget or hits a permanent error
    /// - Compositing fails
    #[tracing::instrument(
        skip(self, brief),
        fields(theme = %brief.theme(), pages = brief.page_count(), language = %brief.language())
    )]
    pub async fn generate(&self, brief: &ComicBrief) -> HokusaiResult<ComicArtifact> {
        self.check_preconditions(brief)?;
        let page_count = *brief.page_count();

        self.advance(Phase::GeneratingOutline);
        let instructions = plot_writer_instructions(
            brief.theme(),
            brief.extra_content(),
            page_count,
            *brief.language(),
        );
        let outline = self.plot_writer.write_plot(&instructions).await?;

        self.advance(Phase::Segmenting);
        let script = split_pages(&outline);
        for page in 1..=page_count {
            if !script.contains_page(page) {
                return Err(StudioError::new(StudioErrorKind::MissingPage { page }).into());
            }
        }

        let conversation = self.image_studio.open_session(&self.session_config).await?;
        let mut session = GenerationSession::new(conversation, brief.reference_image().clone());

        for page in 1..=page_count {
            self.advance(Phase::GeneratingPage {
                page,
                total: page_count,
            });
            self.generate_page(&mut session, &script, page, page_count)
                .await?;
        }

        // Unreachable given the per-page contract above, but checked anyway
        // before touching the compositor.
        let produced = session.artifacts().len() as u32;
        if produced != page_count {
            return Err(StudioError::new(StudioErrorKind::PageCountMismatch {
                expected: page_count,
                actual: produced,
            })
            .into());
        }

        self.advance(Phase::Compositing);
        let page_paths: Vec<PathBuf> = session
            .artifacts()
            .iter()
            .map(|artifact| artifact.path().clone())
            .collect();
        let output_path = self.store.comic_path(page_count);
        combine_images_vertical(&page_paths, &output_path)?;

        self.advance(Phase::Done);
        Ok(ComicArtifact::new(output_path, session.into_artifacts()))
    }

    fn check_preconditions(&self, brief: &ComicBrief) -> HokusaiResult<()> {
        if brief.theme().trim().is_empty() {
            return Err(StudioError::new(StudioErrorKind::EmptyTheme).into());
        }

        let requested = *brief.page_count();
        if !(1..=MAX_PAGES).contains(&requested) {
            return Err(StudioError::new(StudioErrorKind::PageCountOutOfRange { requested }).into());
        }

        Ok(())
    }

    /// Generate one page, retrying retryable failures up to the attempt
    /// ceiling, and append its artifact to the session.
    async fn generate_page(
        &self,
        session: &mut GenerationSession,
        script: &PageScript,
        page: u32,
        total: u32,
    ) -> HokusaiResult<()> {
        let block = script
            .block(page)
            .ok_or_else(|| StudioError::new(StudioErrorKind::MissingPage { page }))?;

        // The payload is constructed once per page; retries re-issue it
        // unchanged.
        let parts = self.page_parts(session, block, page).await?;

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            match self.attempt_page(session, parts.clone(), page).await {
                Ok(artifact) => {
                    tracing::info!(page, attempts, "Page generated");
                    session.push_artifact(artifact);
                    return Ok(());
                }
                Err(e) if e.is_retryable() && attempts < MAX_ATTEMPTS => {
                    tracing::warn!(page, attempt = attempts, error = %e, "Retrying page generation");
                    self.progress.report(
                        Phase::GeneratingPage { page, total }.percent(),
                        &format!(
                            "Error generating page {}, retrying ({}/{})...",
                            page, attempts, MAX_ATTEMPTS
                        ),
                    );
                }
                Err(e) => {
                    tracing::error!(page, attempts, error = %e, "Page generation failed");
                    return Err(StudioError::new(StudioErrorKind::PageFailed {
                        page,
                        attempts,
                        cause: e.to_string(),
                    })
                    .into());
                }
            }
        }
    }

    /// Build the request payload for one page.
    ///
    /// Page 1 optionally leads with the character reference; later pages
    /// attach the previous page's persisted image, read back from storage.
    async fn page_parts(
        &self,
        session: &GenerationSession,
        block: &str,
        page: u32,
    ) -> HokusaiResult<Vec<Part>> {
        if page == 1 {
            return Ok(match session.reference_image() {
                Some(reference) => vec![
                    Part::text(REFERENCE_USAGE_INSTRUCTION),
                    Part::Image {
                        mime: Some(reference.mime_type().clone()),
                        source: MediaSource::Binary(reference.data().clone()),
                    },
                    Part::text(block),
                ],
                None => vec![Part::text(block)],
            });
        }

        let mut parts = vec![Part::text(block)];
        if let Some(previous) = session.last_artifact() {
            let previous_data = self.store.load(previous.path()).await?;
            parts.push(Part::png(previous_data));
        }
        Ok(parts)
    }

    /// One send-validate-persist attempt for a page.
    async fn attempt_page(
        &self,
        session: &mut GenerationSession,
        parts: Vec<Part>,
        page: u32,
    ) -> HokusaiResult<PageArtifact> {
        let response = session.conversation_mut().send(parts).await?;

        let image = response
            .first_image()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::NoImageData))?;

        let data = image.to_vec();
        let path = self.store.save_page(page, &data).await?;
        Ok(PageArtifact::new(page, data, path))
    }

    fn advance(&self, phase: Phase) {
        let percent = phase.percent();
        let status = phase.status();
        tracing::info!(?phase, percent, "Phase transition");
        self.progress.report(percent, &status);
    }
}
