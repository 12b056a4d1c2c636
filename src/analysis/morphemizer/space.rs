//! Morphemizer for languages that separate words with spaces.

use std::any::Any;

use regex::Regex;

use super::Morphemizer;
use crate::analysis::script::is_word_char;
use crate::error::Result;
use crate::morpheme::{Morpheme, UNKNOWN};

/// Splits text into runs of non-space, non-digit characters.
///
/// Works for English, German, Spanish and other space-delimited languages.
/// Because it is general purpose it cannot recover base forms from
/// inflections: `runs` and `run` are different morphemes.
#[derive(Clone, Debug)]
pub struct SpaceMorphemizer {
    pattern: Regex,
}

impl SpaceMorphemizer {
    /// Create a new space morphemizer.
    pub fn new() -> Self {
        SpaceMorphemizer {
            pattern: Regex::new(r"[^\s\d]+").expect("word run pattern should be valid"),
        }
    }
}

impl Default for SpaceMorphemizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Morphemizer for SpaceMorphemizer {
    fn morphemes(&self, expression: &str) -> Result<Vec<Morpheme>> {
        let morphemes = self
            .pattern
            .find_iter(expression)
            // Runs end at word boundaries: "world!" -> "world", "--" -> nothing.
            .map(|run| run.as_str().trim_matches(|c: char| !is_word_char(c)))
            .filter(|word| !word.is_empty())
            .map(|word| Morpheme::uniform(word.to_lowercase(), UNKNOWN, UNKNOWN))
            .collect();

        Ok(morphemes)
    }

    fn description(&self) -> String {
        "Language w/ Spaces".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
