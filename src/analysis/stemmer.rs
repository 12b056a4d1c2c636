//! Dictionary stemming and the capitalization fallback.
//!
//! A [`DictionaryStemmer`] maps a word to zero or more candidate stems taken
//! from a language dictionary. [`stem_with_fallback`] layers the lookup
//! heuristic on top of it:
//!
//! 1. the lowercased word,
//! 2. the capitalized word (recovers proper nouns such as `Дагестан`),
//! 3. otherwise the lowercased word is its own stem.
//!
//! An unknown word is assumed to be a new common word rather than a proper
//! noun, so the last step never keeps the capitalization.

use crate::analysis::script::capitalize;

/// Trait for dictionary-backed stemmers.
pub trait DictionaryStemmer: Send + Sync {
    /// Candidate stems for `word`, best first, as UTF-8 encoded bytes.
    ///
    /// An empty vector means the dictionary does not know the word.
    fn stem(&self, word: &str) -> Vec<Vec<u8>>;

    /// Get the name of this stemmer.
    fn name(&self) -> &str;
}

/// Resolve `word` to `(surface, stem)` using the fallback heuristic.
///
/// `surface` is the lowercased or capitalized variant that matched the
/// dictionary, or the lowercased word when neither did.
pub fn stem_with_fallback(stemmer: &dyn DictionaryStemmer, word: &str) -> (String, String) {
    let lowercased = word.to_lowercase();
    if let Some(stem) = first_stem(stemmer, &lowercased) {
        return (lowercased, stem);
    }

    let capitalized = capitalize(word);
    if let Some(stem) = first_stem(stemmer, &capitalized) {
        return (capitalized, stem);
    }

    let stem = lowercased.clone();
    (lowercased, stem)
}

fn first_stem(stemmer: &dyn DictionaryStemmer, word: &str) -> Option<String> {
    stemmer
        .stem(word)
        .into_iter()
        .next()
        .map(|stem| String::from_utf8_lossy(&stem).into_owned())
}

pub mod hunspell;

pub use hunspell::HunspellDictionary;
