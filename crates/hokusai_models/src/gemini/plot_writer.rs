//! Plot generation through the `gemini-rust` SDK.

use async_trait::async_trait;
use std::env;

use gemini_rust::{client::Model, Gemini};

use hokusai_error::{GeminiError, GeminiErrorKind, HokusaiResult};
use hokusai_interface::PlotWriter;

use super::GeminiResult;

/// Default text model for plot generation.
const DEFAULT_PLOT_MODEL: &str = "gemini-3-pro-preview";

/// Client for the Gemini text API, used for the single plot-writer call at
/// the start of a run.
///
/// There is deliberately no retry here: the orchestrator treats a plot
/// failure as fatal, unlike the per-page image loop.
pub struct GeminiPlotWriter {
    client: Gemini,
    model_name: String,
}

impl std::fmt::Debug for GeminiPlotWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiPlotWriter")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiPlotWriter {
    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Known names map to their enum variants; anything else becomes
    /// `Model::Custom` with the "models/" prefix the API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Create a new plot writer with the default model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hokusai_models::GeminiPlotWriter;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let writer = GeminiPlotWriter::new()?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(name = "gemini_plot_writer_new")]
    pub fn new() -> HokusaiResult<Self> {
        Self::with_model(DEFAULT_PLOT_MODEL)
    }

    /// Create a new plot writer for a specific model.
    #[tracing::instrument(name = "gemini_plot_writer_with_model")]
    pub fn with_model(model_name: &str) -> HokusaiResult<Self> {
        Self::new_internal(model_name).map_err(Into::into)
    }

    /// Internal constructor that returns Gemini-specific errors.
    fn new_internal(model_name: &str) -> GeminiResult<Self> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        let client = Gemini::with_model(api_key, Self::model_name_to_enum(model_name))
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            model_name: model_name.to_string(),
        })
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn write_plot_internal(&self, instructions: &str) -> GeminiResult<String> {
        let response = self
            .client
            .generate_content()
            .with_user_message(instructions)
            .execute()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let text = response.text();
        tracing::debug!(chars = text.len(), "Received plot text");
        Ok(text)
    }
}

#[async_trait]
impl PlotWriter for GeminiPlotWriter {
    #[tracing::instrument(skip(self, instructions), fields(model = %self.model_name))]
    async fn write_plot(&self, instructions: &str) -> HokusaiResult<String> {
        self.write_plot_internal(instructions).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
