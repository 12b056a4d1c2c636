//! # Morphemizer
//!
//! Pluggable text-to-morpheme segmentation for vocabulary and frequency
//! analysis.
//!
//! ## Features
//!
//! - One [`Morphemizer`](analysis::Morphemizer) trait for every language
//! - Whitespace, CJK character, affix dictionary, Chinese and Japanese strategies
//! - Per-strategy LRU result cache
//! - Process-wide registry with lookup by name
//! - Frequency tables grouped by morpheme type
//!
//! ## Example
//!
//! ```
//! use morphemizer::analysis::MorphemizerRegistry;
//! use morphemizer::analysis::morphemizer::{CjkCharMorphemizer, Morphemizer, SpaceMorphemizer};
//!
//! let morphemizers: Vec<Box<dyn Morphemizer>> = vec![
//!     Box::new(SpaceMorphemizer::new()),
//!     Box::new(CjkCharMorphemizer::new()),
//! ];
//! let registry = MorphemizerRegistry::from_morphemizers(morphemizers, 1024);
//!
//! let cjk = registry.get_by_name("CjkCharMorphemizer").unwrap();
//! let morphemes = cjk.segment("你好");
//! assert_eq!(morphemes.len(), 2);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod frequency;
pub mod morpheme;

pub mod prelude {
    pub use crate::analysis::{
        CachedMorphemizer, Morphemizer, MorphemizerRegistry, get_morphemizer, list_morphemizers,
    };
    pub use crate::config::MorphemizerConfig;
    pub use crate::error::{MorphemizerError, Result};
    pub use crate::morpheme::{Morpheme, MorphemeKey, UNKNOWN};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
