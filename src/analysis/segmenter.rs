//! Statistical word segmentation for Chinese text.
//!
//! [`WordSegmenter`] is the seam to a word/part-of-speech segmentation engine;
//! [`JiebaSegmenter`] implements it with the jieba segmenter.

use std::fmt::{Debug, Formatter};

use jieba_rs::Jieba;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One word produced by a segmenter, with its part-of-speech flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedWord {
    pub word: String,
    pub flag: String,
}

impl SegmentedWord {
    pub fn new<W: Into<String>, F: Into<String>>(word: W, flag: F) -> Self {
        SegmentedWord {
            word: word.into(),
            flag: flag.into(),
        }
    }
}

/// Trait for word/part-of-speech segmentation engines.
///
/// Implementations are shared between threads and must tolerate concurrent
/// calls to [`segment`](Self::segment).
pub trait WordSegmenter: Send + Sync {
    /// Split `text` into words, in order, each with a part-of-speech flag.
    fn segment(&self, text: &str) -> Result<Vec<SegmentedWord>>;

    /// Get the name of this segmenter.
    fn name(&self) -> &str;
}

/// Jieba segmenter using its bundled dictionary.
pub struct JiebaSegmenter {
    inner: Jieba,
    hmm: bool,
}

impl JiebaSegmenter {
    /// Create a segmenter; `hmm` enables recognition of words missing from
    /// the dictionary.
    pub fn new(hmm: bool) -> Self {
        debug!("Loading jieba dictionary (hmm: {hmm})");
        JiebaSegmenter {
            inner: Jieba::new(),
            hmm,
        }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl WordSegmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<SegmentedWord>> {
        Ok(self
            .inner
            .tag(text, self.hmm)
            .into_iter()
            .map(|tag| SegmentedWord::new(tag.word, tag.tag))
            .collect())
    }

    fn name(&self) -> &str {
        "jieba"
    }
}

impl Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaSegmenter")
            .field("hmm", &self.hmm)
            .finish()
    }
}
