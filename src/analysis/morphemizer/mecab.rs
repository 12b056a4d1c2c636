//! Japanese morphemizer backed by MeCab.

use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use log::warn;

use super::Morphemizer;
use crate::analysis::mecab::{AnalyzedToken, MecabCommand, MorphologicalTool};
use crate::config::MecabConfig;
use crate::error::Result;
use crate::morpheme::{Morpheme, UNKNOWN};

/// Shown in the description when the analyzer cannot identify itself.
pub const UNAVAILABLE: &str = "UNAVAILABLE";

/// Japanese has no spaces between words, so segmentation is delegated to an
/// external morphological analyzer.
///
/// Plain spaces are removed before analysis: other tools insert them into
/// Japanese text and they break the analyzer's word boundaries.
pub struct MecabMorphemizer {
    tool: Arc<dyn MorphologicalTool>,
}

impl MecabMorphemizer {
    /// Create a morphemizer running the configured `mecab` executable.
    pub fn new(config: &MecabConfig) -> Self {
        Self::with_tool(Arc::new(MecabCommand::new(config)))
    }

    /// Create a morphemizer with a custom analyzer.
    pub fn with_tool(tool: Arc<dyn MorphologicalTool>) -> Self {
        MecabMorphemizer { tool }
    }

    fn to_morpheme(token: AnalyzedToken) -> Morpheme {
        let base = token.base.unwrap_or_else(|| token.surface.clone());
        Morpheme::new(
            base.clone(),
            base,
            token.surface,
            token.reading.unwrap_or_else(|| UNKNOWN.to_string()),
            token.pos.unwrap_or_else(|| UNKNOWN.to_string()),
            token.sub_pos.unwrap_or_else(|| UNKNOWN.to_string()),
        )
    }
}

impl Morphemizer for MecabMorphemizer {
    fn morphemes(&self, expression: &str) -> Result<Vec<Morpheme>> {
        let expression = expression.replace(' ', "");
        if expression.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .tool
            .analyze(&expression)?
            .into_iter()
            .map(Self::to_morpheme)
            .collect())
    }

    fn description(&self) -> String {
        let identity = self.tool.identity().unwrap_or_else(|e| {
            warn!("Could not identify the Japanese analyzer: {e}");
            UNAVAILABLE.to_string()
        });
        format!("Japanese {identity}")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Debug for MecabMorphemizer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MecabMorphemizer").finish_non_exhaustive()
    }
}
