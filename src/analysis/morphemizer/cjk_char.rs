//! Morphemizer that treats every CJK ideograph as a morpheme.

use std::any::Any;

use super::Morphemizer;
use crate::analysis::script::is_cjk_ideograph;
use crate::error::Result;
use crate::morpheme::{CJK_CHAR, Morpheme, UNKNOWN};

/// Splits text into single Chinese-Japanese-Korean ideographs.
///
/// Kana, Latin text, punctuation and whitespace are dropped. Useful as a
/// segmentation-free fallback for scripts without word boundaries.
#[derive(Clone, Copy, Debug, Default)]
pub struct CjkCharMorphemizer;

impl CjkCharMorphemizer {
    pub fn new() -> Self {
        CjkCharMorphemizer
    }
}

impl Morphemizer for CjkCharMorphemizer {
    fn morphemes(&self, expression: &str) -> Result<Vec<Morpheme>> {
        Ok(expression
            .chars()
            .filter(|c| is_cjk_ideograph(*c))
            .map(|c| Morpheme::uniform(c.to_string(), CJK_CHAR, UNKNOWN))
            .collect())
    }

    fn description(&self) -> String {
        "CJK Characters".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cjk_char_morphemizer() {
        let morphemes = CjkCharMorphemizer::new().morphemes("你好, world!").unwrap();

        assert_eq!(morphemes.len(), 2);
        assert_eq!(morphemes[0].norm(), "你");
        assert_eq!(morphemes[0].inflected(), "你");
        assert_eq!(morphemes[0].pos(), CJK_CHAR);
        assert_eq!(morphemes[0].sub_pos(), UNKNOWN);
        assert_eq!(morphemes[1].base(), "好");
    }

    #[test]
    fn test_kana_dropped() {
        let morphemes = CjkCharMorphemizer::new().morphemes("日本語のテキスト").unwrap();
        let chars: Vec<&str> = morphemes.iter().map(|m| m.norm()).collect();

        assert_eq!(chars, vec!["日", "本", "語"]);
    }

    #[test]
    fn test_no_ideographs() {
        assert!(CjkCharMorphemizer::new().morphemes("hello").unwrap().is_empty());
        assert!(CjkCharMorphemizer::new().morphemes("").unwrap().is_empty());
    }
}
