//! Morphemizer for inflected languages with an affix dictionary.
//!
//! One instance is bound to one language dictionary. Words are extracted with
//! `\w+` and resolved through [`stem_with_fallback`]: lowercase lookup,
//! capitalized lookup for proper nouns, and finally the lowercased word as its
//! own stem.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use morphemizer::analysis::morphemizer::Morphemizer;
//! use morphemizer::analysis::morphemizer::dictionary::DictionaryMorphemizer;
//! use morphemizer::analysis::stemmer::HunspellDictionary;
//! use morphemizer::config::DictionaryProfile;
//!
//! let dictionary = HunspellDictionary::parse(
//!     "eu_TEST",
//!     "SFX A Y 1\nSFX A 0 a .\n",
//!     "1\netxe/A\n",
//! )
//! .unwrap();
//! let profile = DictionaryProfile::new("BasqueMorphemizer", "eu_TEST", "Basque Hunspell");
//! let morphemizer = DictionaryMorphemizer::with_stemmer(profile, Arc::new(dictionary));
//!
//! let morphemes = morphemizer.morphemes("Etxea").unwrap();
//! assert_eq!(morphemes[0].norm(), "etxe");
//! assert_eq!(morphemes[0].inflected(), "etxea");
//! assert_eq!(morphemizer.name(), "BasqueMorphemizer");
//! ```

use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::path::Path;
use std::sync::Arc;

use regex::Regex;

use super::Morphemizer;
use crate::analysis::stemmer::{DictionaryStemmer, HunspellDictionary, stem_with_fallback};
use crate::config::DictionaryProfile;
use crate::error::Result;
use crate::morpheme::{Morpheme, UNKNOWN};

/// Stems every word of an expression against one language dictionary.
pub struct DictionaryMorphemizer {
    profile: DictionaryProfile,
    stemmer: Arc<dyn DictionaryStemmer>,
    word_pattern: Regex,
}

impl DictionaryMorphemizer {
    /// Load the profile's Hunspell dictionary from `dictionary_dir`.
    ///
    /// Fails when the dictionary files are malformed, or missing for a
    /// language without a bundled copy.
    pub fn open<P: AsRef<Path>>(profile: DictionaryProfile, dictionary_dir: P) -> Result<Self> {
        let dictionary = HunspellDictionary::open(dictionary_dir, &profile.code)?;
        Ok(Self::with_stemmer(profile, Arc::new(dictionary)))
    }

    /// Create a morphemizer with an already loaded stemmer.
    pub fn with_stemmer(profile: DictionaryProfile, stemmer: Arc<dyn DictionaryStemmer>) -> Self {
        DictionaryMorphemizer {
            profile,
            stemmer,
            word_pattern: word_pattern(),
        }
    }

    pub fn profile(&self) -> &DictionaryProfile {
        &self.profile
    }
}

fn word_pattern() -> Regex {
    Regex::new(r"\w+").expect("word pattern should be valid")
}

impl Morphemizer for DictionaryMorphemizer {
    fn morphemes(&self, expression: &str) -> Result<Vec<Morpheme>> {
        Ok(self
            .word_pattern
            .find_iter(expression)
            .map(|word| {
                let (surface, stem) = stem_with_fallback(self.stemmer.as_ref(), word.as_str());
                Morpheme::new(stem.clone(), stem.clone(), surface, stem, UNKNOWN, UNKNOWN)
            })
            .collect())
    }

    fn description(&self) -> String {
        self.profile.description.clone()
    }

    fn name(&self) -> &str {
        &self.profile.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Debug for DictionaryMorphemizer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryMorphemizer")
            .field("profile", &self.profile)
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MorphemizerError;

    const AFF: &str = "SET UTF-8\nSFX A Y 2\nSFX A 0 а .\nSFX A 0 ом .\n";
    const DIC: &str = "3\nстол/A\nДагестан/A\nкот/A\n";

    fn morphemizer() -> DictionaryMorphemizer {
        let dictionary = HunspellDictionary::parse("ru_TEST", AFF, DIC).unwrap();
        DictionaryMorphemizer::with_stemmer(
            DictionaryProfile::new("RussianMorphemizer", "ru_TEST", "Russian Hunspell"),
            Arc::new(dictionary),
        )
    }

    #[test]
    fn test_known_inflection() {
        let morphemes = morphemizer().morphemes("Столом").unwrap();

        assert_eq!(
            morphemes,
            vec![Morpheme::new("стол", "стол", "столом", "стол", UNKNOWN, UNKNOWN)]
        );
    }

    #[test]
    fn test_capitalized_dictionary_entry() {
        let morphemes = morphemizer().morphemes("из дагестана").unwrap();

        assert_eq!(morphemes.len(), 2);
        assert_eq!(morphemes[1].inflected(), "Дагестана");
        assert_eq!(morphemes[1].norm(), "Дагестан");
        assert_eq!(morphemes[1].base(), "Дагестан");
        assert_eq!(morphemes[1].read(), "Дагестан");
    }

    #[test]
    fn test_unknown_word() {
        let morphemes = morphemizer().morphemes("Хабаровск").unwrap();

        assert_eq!(
            morphemes,
            vec![Morpheme::new(
                "хабаровск",
                "хабаровск",
                "хабаровск",
                "хабаровск",
                UNKNOWN,
                UNKNOWN
            )]
        );
    }

    #[test]
    fn test_word_extraction() {
        let morphemes = morphemizer().morphemes("кот, стола! 42").unwrap();
        let norms: Vec<&str> = morphemes.iter().map(|m| m.norm()).collect();

        assert_eq!(norms, vec!["кот", "стол", "42"]);
        assert!(morphemizer().morphemes("").unwrap().is_empty());
        assert!(morphemizer().morphemes(" ?! ").unwrap().is_empty());
    }

    #[test]
    fn test_profile_name_and_description() {
        let morphemizer = morphemizer();
        assert_eq!(morphemizer.name(), "RussianMorphemizer");
        assert_eq!(morphemizer.description(), "Russian Hunspell");
        assert_eq!(morphemizer.profile().code, "ru_TEST");
    }

    #[test]
    fn test_open_missing_dictionary_fails() {
        let profile = DictionaryProfile::new("KlingonMorphemizer", "tlh", "Klingon Hunspell");
        let result = DictionaryMorphemizer::open(profile, "/nonexistent/hunspell");

        assert!(matches!(result, Err(MorphemizerError::Dictionary(_))));
    }
}
