//! Run phases and progress allocation.

use serde::{Deserialize, Serialize};

/// The phase a generation run is currently in.
///
/// Phases advance strictly forward; a failed run simply stops advancing and
/// surfaces its error to the caller. Each phase maps to a status line and a
/// fixed progress allocation: 10% for plot generation, 10% for segmentation,
/// a 60% band split across the page loop, and a fixed tail for compositing.
///
/// # Examples
///
/// ```
/// use hokusai_core::Phase;
///
/// assert_eq!(Phase::GeneratingOutline.percent(), 10);
/// assert_eq!(Phase::GeneratingPage { page: 2, total: 4 }.percent(), 50);
/// assert_eq!(Phase::Done.percent(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No work started yet
    NotStarted,
    /// Waiting on the plot-writer call
    GeneratingOutline,
    /// Segmenting the plot into page blocks
    Segmenting,
    /// Generating one page image
    GeneratingPage {
        /// Page currently being generated (1-based)
        page: u32,
        /// Total pages requested
        total: u32,
    },
    /// Combining page images into the final strip
    Compositing,
    /// Run finished successfully
    Done,
}

impl Phase {
    /// Progress percentage for this phase, 0-100.
    ///
    /// Monotonically non-decreasing over the phase order for any fixed
    /// page total.
    pub fn percent(&self) -> u8 {
        match *self {
            Phase::NotStarted => 0,
            Phase::GeneratingOutline => 10,
            Phase::Segmenting => 20,
            Phase::GeneratingPage { page, total } => (20 + 60 * page / total.max(1)) as u8,
            Phase::Compositing => 90,
            Phase::Done => 100,
        }
    }

    /// Human-readable status line for this phase.
    pub fn status(&self) -> String {
        match self {
            Phase::NotStarted => "Not started".to_string(),
            Phase::GeneratingOutline => "Step 1: Generating plot...".to_string(),
            Phase::Segmenting => "Step 2: Splitting into page-by-page prompts...".to_string(),
            Phase::GeneratingPage { page, total } => {
                format!("Step {}: Generating page {}/{}...", page + 2, page, total)
            }
            Phase::Compositing => "Final step: Combining all pages...".to_string(),
            Phase::Done => "Comic generation complete".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_monotonic_across_a_run() {
        let total = 5;
        let mut phases = vec![Phase::NotStarted, Phase::GeneratingOutline, Phase::Segmenting];
        phases.extend((1..=total).map(|page| Phase::GeneratingPage { page, total }));
        phases.push(Phase::Compositing);
        phases.push(Phase::Done);

        let percents: Vec<u8> = phases.iter().map(Phase::percent).collect();
        assert!(percents.windows(2).all(|w| w[0] <= w[1]), "{:?}", percents);
    }

    #[test]
    fn page_band_spans_twenty_to_eighty() {
        assert_eq!(Phase::GeneratingPage { page: 1, total: 1 }.percent(), 80);
        assert_eq!(Phase::GeneratingPage { page: 1, total: 7 }.percent(), 28);
        assert_eq!(Phase::GeneratingPage { page: 7, total: 7 }.percent(), 80);
    }

    #[test]
    fn status_names_the_page() {
        let status = Phase::GeneratingPage { page: 3, total: 4 }.status();
        assert_eq!(status, "Step 5: Generating page 3/4...");
    }
}
