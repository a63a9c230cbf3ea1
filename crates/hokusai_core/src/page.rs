//! Segmented page script types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized key for a page number: lowercase literal prefix plus the
/// number with no separators.
///
/// # Examples
///
/// ```
/// use hokusai_core::page_key;
///
/// assert_eq!(page_key(1), "page1");
/// assert_eq!(page_key(12), "page12");
/// ```
pub fn page_key(page_number: u32) -> String {
    format!("page{}", page_number)
}

/// One page's heading-plus-body segment of the plot outline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct PageBlock {
    /// The page number parsed from the block heading
    page_number: u32,
    /// The full verbatim block, heading included
    raw_text: String,
}

impl PageBlock {
    /// Create a new page block.
    pub fn new(page_number: u32, raw_text: impl Into<String>) -> Self {
        Self {
            page_number,
            raw_text: raw_text.into(),
        }
    }
}

/// The segmented plot: a mapping from page key to the full verbatim block
/// of text associated with that page.
///
/// Page numbers present are exactly those the segmenter found in the text;
/// they are not required to be contiguous or to start at 1. Whether the
/// script covers a requested page range is the orchestrator's precondition,
/// not a property enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageScript {
    blocks: BTreeMap<u32, String>,
}

impl PageScript {
    /// Build a script from segmented blocks.
    pub fn from_blocks(blocks: impl IntoIterator<Item = PageBlock>) -> Self {
        Self {
            blocks: blocks
                .into_iter()
                .map(|b| (b.page_number, b.raw_text))
                .collect(),
        }
    }

    /// The block text for a page, if present.
    pub fn block(&self, page_number: u32) -> Option<&str> {
        self.blocks.get(&page_number).map(String::as_str)
    }

    /// Whether a block exists for the given page number.
    pub fn contains_page(&self, page_number: u32) -> bool {
        self.blocks.contains_key(&page_number)
    }

    /// Number of segmented blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True when no heading matched in the source text.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Page numbers in ascending order.
    pub fn page_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.blocks.keys().copied()
    }

    /// Iterate blocks as `(key, block)` pairs in page order, with keys
    /// normalized via [`page_key`].
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.blocks
            .iter()
            .map(|(n, text)| (page_key(*n), text.as_str()))
    }
}
