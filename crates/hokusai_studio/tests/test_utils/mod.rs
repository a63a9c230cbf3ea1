//! Test utilities for studio tests.
//!
//! Mock providers with scripted behavior and call counting, so the state
//! machine can be exercised without a live service.

use async_trait::async_trait;
use hokusai_core::{Part, TurnPart, TurnResponse};
use hokusai_error::{GeminiError, GeminiErrorKind, HokusaiResult};
use hokusai_interface::{ImageSession, ImageStudio, PlotWriter, ProgressSink, SessionConfig};
use std::collections::VecDeque;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Encode a real PNG so storage and compositing can round-trip it.
pub fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(color));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Build a plot outline with one well-formed heading per page.
pub fn outline_with_pages(pages: u32) -> String {
    (1..=pages)
        .map(|n| format!("[Page {}] (4 panels)\nPanel description for page {}.\n", n, n))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Scripted plot writer.
pub struct MockPlotWriter {
    plot: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockPlotWriter {
    pub fn new_success(plot: impl Into<String>) -> Self {
        Self {
            plot: Some(plot.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn new_failure() -> Self {
        Self {
            plot: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlotWriter for MockPlotWriter {
    async fn write_plot(&self, _instructions: &str) -> HokusaiResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.plot {
            Some(plot) => Ok(plot.clone()),
            None => Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                "mock plot failure".to_string(),
            ))
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-plot-writer"
    }
}

/// One scripted image turn outcome.
#[derive(Debug, Clone)]
pub enum MockTurn {
    /// Respond with a single image part carrying these bytes
    Image(Vec<u8>),
    /// Respond with an empty parts collection (no image to extract)
    Empty,
    /// Respond with text parts only (still no image)
    TextOnly(String),
    /// Fail the turn with this error kind
    Error(GeminiErrorKind),
}

/// Scripted image studio; sessions consume turns from a shared queue and
/// record every request's parts.
#[derive(Clone)]
pub struct MockImageStudio {
    script: Arc<Mutex<VecDeque<MockTurn>>>,
    turns: Arc<AtomicUsize>,
    sessions_opened: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Vec<Part>>>>,
}

impl MockImageStudio {
    pub fn new_sequence(turns: Vec<MockTurn>) -> Self {
        Self {
            script: Arc::new(Mutex::new(turns.into())),
            turns: Arc::new(AtomicUsize::new(0)),
            sessions_opened: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Total turns sent across all sessions.
    pub fn turn_count(&self) -> usize {
        self.turns.load(Ordering::SeqCst)
    }

    /// How many conversations were opened.
    pub fn session_count(&self) -> usize {
        self.sessions_opened.load(Ordering::SeqCst)
    }

    /// The parts of every request, in send order.
    pub fn requests(&self) -> Vec<Vec<Part>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStudio for MockImageStudio {
    async fn open_session(&self, _config: &SessionConfig) -> HokusaiResult<Box<dyn ImageSession>> {
        self.sessions_opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockImageSession {
            script: Arc::clone(&self.script),
            turns: Arc::clone(&self.turns),
            requests: Arc::clone(&self.requests),
        }))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image-studio"
    }
}

struct MockImageSession {
    script: Arc<Mutex<VecDeque<MockTurn>>>,
    turns: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Vec<Part>>>>,
}

#[async_trait]
impl ImageSession for MockImageSession {
    async fn send(&mut self, parts: Vec<Part>) -> HokusaiResult<TurnResponse> {
        self.turns.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(parts);

        let turn = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockTurn::Empty);

        match turn {
            MockTurn::Image(data) => Ok(TurnResponse {
                parts: vec![TurnPart::Image {
                    mime: Some("image/png".to_string()),
                    data,
                }],
            }),
            MockTurn::Empty => Ok(TurnResponse { parts: vec![] }),
            MockTurn::TextOnly(text) => Ok(TurnResponse {
                parts: vec![TurnPart::Text(text)],
            }),
            MockTurn::Error(kind) => Err(GeminiError::new(kind).into()),
        }
    }
}

/// Progress sink that records every report.
#[derive(Clone, Default)]
pub struct RecordingProgress {
    events: Arc<Mutex<Vec<(u8, String)>>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(u8, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn report(&self, percent: u8, status: &str) {
        self.events.lock().unwrap().push((percent, status.to_string()));
    }
}
