//! Core morphemizer trait and the built-in segmentation strategies.
//!
//! A [`Morphemizer`] turns an expression into the ordered list of morphemes
//! it contains. Languages need very different strategies, so each one lives
//! in its own module:
//!
//! - [`space::SpaceMorphemizer`] - Languages delimited by spaces, no inflection recovery
//! - [`cjk_char::CjkCharMorphemizer`] - One morpheme per CJK ideograph
//! - [`dictionary::DictionaryMorphemizer`] - Affix dictionary stemming with capitalization fallback
//! - [`jieba::JiebaMorphemizer`] - Chinese statistical word segmentation
//! - [`mecab::MecabMorphemizer`] - Japanese morphological analysis through MeCab
//!
//! # Examples
//!
//! ```
//! use morphemizer::analysis::morphemizer::Morphemizer;
//! use morphemizer::analysis::morphemizer::space::SpaceMorphemizer;
//!
//! let morphemizer = SpaceMorphemizer::new();
//! let morphemes = morphemizer.morphemes("Hello World").unwrap();
//!
//! assert_eq!(morphemes[0].norm(), "hello");
//! assert_eq!(morphemes[1].norm(), "world");
//! assert_eq!(morphemizer.name(), "SpaceMorphemizer");
//! ```

use std::any::Any;

use crate::error::Result;
use crate::morpheme::Morpheme;

/// Trait for segmentation strategies that convert text into morphemes.
///
/// Implementations must be immutable after construction; anything they wrap
/// (dictionaries, models, external tools) is loaded up front and only read
/// afterwards. The `Send + Sync` bound lets one instance serve concurrent
/// callers, which also obliges every wrapped collaborator to tolerate
/// concurrent calls.
pub trait Morphemizer: Send + Sync {
    /// Segment `expression` into morphemes, in order of occurrence.
    ///
    /// Empty input, or input without any extractable token, yields an empty
    /// vector. Errors are only returned when a wrapped collaborator fails.
    fn morphemes(&self, expression: &str) -> Result<Vec<Morpheme>>;

    /// One line describing which languages this morphemizer is for.
    ///
    /// Must not fail, even when it probes an external tool.
    fn description(&self) -> String {
        "No information available".to_string()
    }

    /// Stable identifier used for lookup in the registry.
    ///
    /// Defaults to the name of the implementing type.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Provide access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn Any;
}

pub mod cjk_char;
pub mod dictionary;
pub mod jieba;
pub mod mecab;
pub mod space;

pub use cjk_char::CjkCharMorphemizer;
pub use dictionary::DictionaryMorphemizer;
pub use jieba::JiebaMorphemizer;
pub use mecab::MecabMorphemizer;
pub use space::SpaceMorphemizer;
