//! Plot text segmentation.

use hokusai_core::{PageBlock, PageScript};
use regex::Regex;

/// Split generated plot text into per-page blocks.
///
/// A block begins at a heading matching `[Page <integer>]` (any amount of
/// whitespace between the word and the number) and runs up to, but not
/// including, the next such heading or the end of the text. The heading line
/// is retained inside its block. Blocks that are empty after trimming
/// surrounding whitespace are discarded, as is any text before the first
/// heading.
///
/// If the heading pattern never matches, the result is an empty script.
/// That is not an error at this layer; the orchestrator treats an
/// incomplete script as a precondition failure before issuing any image
/// calls.
///
/// # Examples
///
/// ```
/// use hokusai_script::split_pages;
///
/// let script = split_pages("[Page 1]\nfoo\n[Page 2]\nbar");
/// assert_eq!(script.block(1), Some("[Page 1]\nfoo"));
/// assert_eq!(script.block(2), Some("[Page 2]\nbar"));
/// ```
pub fn split_pages(text: &str) -> PageScript {
    let heading = Regex::new(r"\[Page\s+(\d+)\]").expect("Valid page heading regex");

    // Block boundaries are the heading match positions; the slice from one
    // heading to the next keeps the heading with its body.
    let starts: Vec<usize> = heading.find_iter(text).map(|m| m.start()).collect();

    let mut blocks = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        let block = text[start..end].trim();
        if block.is_empty() {
            continue;
        }

        // The block starts at its own heading, so the first capture in the
        // block is the page number that keys it.
        if let Some(caps) = heading.captures(block) {
            match caps[1].parse::<u32>() {
                Ok(number) => blocks.push(PageBlock::new(number, block)),
                Err(e) => {
                    tracing::warn!(heading = &caps[0], error = %e, "Skipping unparseable page heading");
                }
            }
        }
    }

    tracing::debug!(pages = blocks.len(), "Segmented plot text");
    PageScript::from_blocks(blocks)
}
