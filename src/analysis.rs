//! Text segmentation for the morphemizer crate.
//!
//! This module holds the [`Morphemizer`](morphemizer::Morphemizer) trait and
//! its strategies, the collaborators they wrap (affix dictionaries, word
//! segmenters, the MeCab analyzer), the per-strategy result cache and the
//! registry that ties them together.

pub mod cache;
pub mod mecab;
pub mod morphemizer;
pub mod registry;
pub mod script;
pub mod segmenter;
pub mod stemmer;

// Re-export commonly used types
pub use cache::{CacheStats, CachedMorphemizer, MorphemeCache};
pub use morphemizer::Morphemizer;
pub use registry::{MorphemizerInfo, MorphemizerRegistry, get_morphemizer, list_morphemizers};
