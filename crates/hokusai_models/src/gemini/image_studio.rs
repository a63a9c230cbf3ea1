//! Stateful image conversations against the Gemini REST API.
//!
//! The REST API is stateless, so the session replays its accumulated
//! conversation (user parts and model image responses) with every turn,
//! which is exactly what the upstream chat abstraction does under the hood.
//! Only validated turns are recorded: a turn that fails validation leaves
//! the history untouched, so a retry re-issues the same conversation.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::env;

use hokusai_core::{MediaSource, Part, TurnPart, TurnResponse};
use hokusai_error::{GeminiError, GeminiErrorKind, HokusaiResult};
use hokusai_interface::{ImageSession, ImageStudio, SessionConfig};

use super::dto::{
    GenerateContentRequest, GenerateContentResponse, WireContent, WireGenerationConfig,
    WireImageConfig, WirePart,
};
use super::GeminiResult;

/// Default image model for page generation.
const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Default API endpoint.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Factory for Gemini image conversations.
#[derive(Clone)]
pub struct GeminiImageStudio {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl std::fmt::Debug for GeminiImageStudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiImageStudio")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiImageStudio {
    /// Create a new studio with the default image model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hokusai_models::GeminiImageStudio;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let studio = GeminiImageStudio::new()?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(name = "gemini_image_studio_new")]
    pub fn new() -> HokusaiResult<Self> {
        Self::with_model(DEFAULT_IMAGE_MODEL)
    }

    /// Create a new studio for a specific image model.
    #[tracing::instrument(name = "gemini_image_studio_with_model")]
    pub fn with_model(model_name: &str) -> HokusaiResult<Self> {
        Self::new_internal(model_name).map_err(Into::into)
    }

    /// Override the API endpoint, e.g. to point at a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Internal constructor that returns Gemini-specific errors.
    fn new_internal(model_name: &str) -> GeminiResult<Self> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model_name: model_name.to_string(),
        })
    }
}

#[async_trait]
impl ImageStudio for GeminiImageStudio {
    #[tracing::instrument(skip(self, config), fields(model = %self.model_name))]
    async fn open_session(&self, config: &SessionConfig) -> HokusaiResult<Box<dyn ImageSession>> {
        let generation_config = WireGenerationConfig::image_only(WireImageConfig::new(
            config.aspect_ratio().as_str(),
            config.image_size().as_str(),
        ));

        tracing::info!(
            aspect_ratio = config.aspect_ratio().as_str(),
            image_size = config.image_size().as_str(),
            "Opened image conversation"
        );

        Ok(Box::new(GeminiImageSession {
            http: self.http.clone(),
            api_key: self.api_key.clone(),
            url: format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model_name
            ),
            generation_config,
            history: Vec::new(),
        }))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// One stateful image conversation.
///
/// Exclusively owned by a single generation run; the accumulated history
/// grows by one user turn and one model turn per validated response.
pub struct GeminiImageSession {
    http: reqwest::Client,
    api_key: String,
    url: String,
    generation_config: WireGenerationConfig,
    history: Vec<WireContent>,
}

impl std::fmt::Debug for GeminiImageSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiImageSession")
            .field("url", &self.url)
            .field("history_turns", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl GeminiImageSession {
    async fn send_internal(&mut self, parts: Vec<Part>) -> GeminiResult<TurnResponse> {
        let user_turn = WireContent::user(parts.iter().map(part_to_wire).collect());

        let mut contents = self.history.clone();
        contents.push(user_turn.clone());

        let request = GenerateContentRequest::builder()
            .contents(contents)
            .generation_config(self.generation_config.clone())
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let response = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message,
            }));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let candidate = body
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;

        let wire_parts = candidate
            .content
            .and_then(|content| content.parts)
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingParts))?;

        let turn = wire_to_turn(&wire_parts)?;

        // Record the exchange only after validation, so a failed turn is
        // replayed identically on retry.
        self.history.push(user_turn);
        self.history.push(WireContent::model(wire_parts));

        tracing::debug!(
            parts = turn.parts.len(),
            history_turns = self.history.len(),
            "Image turn complete"
        );

        Ok(turn)
    }
}

#[async_trait]
impl ImageSession for GeminiImageSession {
    #[tracing::instrument(skip(self, parts), fields(parts = parts.len()))]
    async fn send(&mut self, parts: Vec<Part>) -> HokusaiResult<TurnResponse> {
        self.send_internal(parts).await.map_err(Into::into)
    }
}

/// Convert a request part to its wire representation.
fn part_to_wire(part: &Part) -> WirePart {
    match part {
        Part::Text(text) => WirePart::text(text.clone()),
        Part::Image { mime, source } => {
            let mime = mime.clone().unwrap_or_else(|| "image/png".to_string());
            let data = match source {
                MediaSource::Base64(encoded) => encoded.clone(),
                MediaSource::Binary(bytes) => STANDARD.encode(bytes),
            };
            WirePart::inline_data(mime, data)
        }
    }
}

/// Convert validated wire parts to a turn response, decoding inline data.
fn wire_to_turn(wire_parts: &[WirePart]) -> GeminiResult<TurnResponse> {
    let mut parts = Vec::new();
    for wire in wire_parts {
        if let Some(text) = &wire.text {
            parts.push(TurnPart::Text(text.clone()));
        } else if let Some(inline) = &wire.inline_data {
            let data = STANDARD
                .decode(&inline.data)
                .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))?;
            parts.push(TurnPart::Image {
                mime: Some(inline.mime_type.clone()),
                data,
            });
        }
    }
    Ok(TurnResponse { parts })
}
