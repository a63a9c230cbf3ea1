//! Instruction language selection.

use serde::{Deserialize, Serialize};

/// Language for the generated plot and all in-comic text.
///
/// Both variants share the same structural prompt contract; the Japanese
/// variant additionally instructs right-to-left panel layout.
///
/// # Examples
///
/// ```
/// use hokusai_core::Language;
///
/// assert_eq!(format!("{}", Language::Japanese), "Japanese");
/// assert_eq!("english".parse::<Language>().unwrap(), Language::English);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Language {
    /// English dialogue, narration, and prompts
    #[default]
    English,
    /// Japanese dialogue, narration, and prompts
    Japanese,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "japanese" | "ja" | "jp" => Ok(Language::Japanese),
            other => Err(format!("Unknown language: {}", other)),
        }
    }
}
