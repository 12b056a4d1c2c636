//! Chinese morphemizer backed by a statistical word segmenter.

use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use super::Morphemizer;
use crate::analysis::script::cjk_only;
use crate::analysis::segmenter::{JiebaSegmenter, WordSegmenter};
use crate::error::Result;
use crate::morpheme::{Morpheme, UNKNOWN};

/// Segments Chinese text into words with part-of-speech tags.
///
/// Everything but CJK ideographs is removed before segmentation, so
/// punctuation and embedded Latin text never reach the segmenter. The
/// segmenter's surface form is used as lemma; no further normalization is
/// done for this script family.
pub struct JiebaMorphemizer {
    segmenter: Arc<dyn WordSegmenter>,
}

impl JiebaMorphemizer {
    /// Create a morphemizer using the jieba segmenter.
    pub fn new(hmm: bool) -> Self {
        Self::with_segmenter(Arc::new(JiebaSegmenter::new(hmm)))
    }

    /// Create a morphemizer with a custom segmenter.
    pub fn with_segmenter(segmenter: Arc<dyn WordSegmenter>) -> Self {
        JiebaMorphemizer { segmenter }
    }

    pub fn segmenter(&self) -> &Arc<dyn WordSegmenter> {
        &self.segmenter
    }
}

impl Morphemizer for JiebaMorphemizer {
    fn morphemes(&self, expression: &str) -> Result<Vec<Morpheme>> {
        let filtered = cjk_only(expression);
        if filtered.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .segmenter
            .segment(&filtered)?
            .into_iter()
            .map(|word| Morpheme::uniform(word.word, word.flag, UNKNOWN))
            .collect())
    }

    fn description(&self) -> String {
        "Chinese".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Debug for JiebaMorphemizer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaMorphemizer")
            .field("segmenter", &self.segmenter.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::segmenter::SegmentedWord;
    use crate::error::MorphemizerError;
    use parking_lot::Mutex;

    /// Splits into two-character words and records what it was asked.
    #[derive(Default)]
    struct PairSegmenter {
        seen: Mutex<Vec<String>>,
    }

    impl WordSegmenter for PairSegmenter {
        fn segment(&self, text: &str) -> Result<Vec<SegmentedWord>> {
            self.seen.lock().push(text.to_string());
            let chars: Vec<char> = text.chars().collect();
            Ok(chars
                .chunks(2)
                .map(|pair| SegmentedWord::new(pair.iter().collect::<String>(), "n"))
                .collect())
        }

        fn name(&self) -> &str {
            "pair"
        }
    }

    struct BrokenSegmenter;

    impl WordSegmenter for BrokenSegmenter {
        fn segment(&self, _text: &str) -> Result<Vec<SegmentedWord>> {
            Err(MorphemizerError::analysis("model unavailable"))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    #[test]
    fn test_filters_before_segmenting() {
        let segmenter = Arc::new(PairSegmenter::default());
        let morphemizer = JiebaMorphemizer::with_segmenter(segmenter.clone());

        let morphemes = morphemizer.morphemes("北京, hello 天安门!").unwrap();

        assert_eq!(segmenter.seen.lock().as_slice(), ["北京天安门"]);
        let words: Vec<&str> = morphemes.iter().map(|m| m.norm()).collect();
        assert_eq!(words, vec!["北京", "天安", "门"]);
        assert_eq!(morphemes[0].inflected(), "北京");
        assert_eq!(morphemes[0].read(), "北京");
        assert_eq!(morphemes[0].pos(), "n");
        assert_eq!(morphemes[0].sub_pos(), UNKNOWN);
    }

    #[test]
    fn test_no_ideographs_skips_segmenter() {
        let segmenter = Arc::new(PairSegmenter::default());
        let morphemizer = JiebaMorphemizer::with_segmenter(segmenter.clone());

        assert!(morphemizer.morphemes("hello, world").unwrap().is_empty());
        assert!(segmenter.seen.lock().is_empty());
    }

    #[test]
    fn test_segmenter_failure_propagates() {
        let morphemizer = JiebaMorphemizer::with_segmenter(Arc::new(BrokenSegmenter));
        assert!(morphemizer.morphemes("北京").is_err());
    }

    #[test]
    fn test_jieba_pos_tags() {
        let morphemizer = JiebaMorphemizer::new(true);
        let morphemes = morphemizer.morphemes("我爱北京天安门。").unwrap();

        let joined: String = morphemes.iter().map(|m| m.inflected()).collect();
        assert_eq!(joined, "我爱北京天安门");
        assert!(morphemes.iter().all(|m| m.pos() != UNKNOWN));
    }

    #[test]
    fn test_name_and_description() {
        let morphemizer = JiebaMorphemizer::with_segmenter(Arc::new(BrokenSegmenter));
        assert_eq!(morphemizer.name(), "JiebaMorphemizer");
        assert_eq!(morphemizer.description(), "Chinese");
    }
}
