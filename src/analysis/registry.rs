//! Process-wide table of morphemizers, looked up by name.
//!
//! The global registry is built on first access from
//! [`MorphemizerConfig::from_env`] and lives until the process exits. Every
//! entry is a [`CachedMorphemizer`], so results are memoized per strategy.
//!
//! Non-global registries can be built from an explicit configuration or from
//! arbitrary morphemizers, which is what tests and embedding hosts use.

use std::sync::Arc;

use ahash::AHashMap;
use lazy_static::lazy_static;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::cache::CachedMorphemizer;
use crate::analysis::morphemizer::{
    CjkCharMorphemizer, DictionaryMorphemizer, JiebaMorphemizer, MecabMorphemizer, Morphemizer,
    SpaceMorphemizer,
};
use crate::config::MorphemizerConfig;
use crate::error::{MorphemizerError, Result};

lazy_static! {
    // The error is kept as text so that every access can report it.
    static ref GLOBAL_REGISTRY: std::result::Result<MorphemizerRegistry, String> =
        MorphemizerConfig::from_env()
            .and_then(|config| MorphemizerRegistry::build(&config))
            .map_err(|e| e.to_string());
}

/// Name and description of a registered morphemizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphemizerInfo {
    pub name: String,
    pub description: String,
}

/// Fixed, ordered set of morphemizers.
pub struct MorphemizerRegistry {
    morphemizers: Vec<Arc<CachedMorphemizer>>,
    by_name: AHashMap<String, usize>,
}

impl MorphemizerRegistry {
    /// Construct every built-in morphemizer from `config`.
    ///
    /// Registry order is space, the configured dictionary languages, MeCab,
    /// Jieba, CJK characters. A dictionary that cannot be loaded fails the
    /// whole construction.
    pub fn build(config: &MorphemizerConfig) -> Result<Self> {
        debug!(
            "Building morphemizer registry (dictionaries in {})",
            config.dictionary_dir.display()
        );

        let mut morphemizers: Vec<Box<dyn Morphemizer>> = vec![Box::new(SpaceMorphemizer::new())];

        for profile in &config.dictionaries {
            let morphemizer = DictionaryMorphemizer::open(profile.clone(), &config.dictionary_dir)
                .map_err(|e| {
                    MorphemizerError::registry(format!("Failed to construct {}: {e}", profile.name))
                })?;
            morphemizers.push(Box::new(morphemizer));
        }

        morphemizers.push(Box::new(MecabMorphemizer::new(&config.mecab)));
        morphemizers.push(Box::new(JiebaMorphemizer::new(config.jieba.hmm)));
        morphemizers.push(Box::new(CjkCharMorphemizer::new()));

        Ok(Self::from_morphemizers(morphemizers, config.cache_capacity))
    }

    /// Wrap `morphemizers` with caches of `cache_capacity` entries each.
    ///
    /// Order is kept. When two morphemizers share a name, lookups resolve to
    /// the later one.
    pub fn from_morphemizers(morphemizers: Vec<Box<dyn Morphemizer>>, cache_capacity: usize) -> Self {
        let mut by_name = AHashMap::with_capacity(morphemizers.len());
        let morphemizers: Vec<Arc<CachedMorphemizer>> = morphemizers
            .into_iter()
            .map(|morphemizer| Arc::new(CachedMorphemizer::new(morphemizer, cache_capacity)))
            .collect();

        for (index, morphemizer) in morphemizers.iter().enumerate() {
            if by_name.insert(morphemizer.name().to_string(), index).is_some() {
                warn!("Duplicate morphemizer name {}", morphemizer.name());
            }
        }

        debug!("Registered {} morphemizers", morphemizers.len());

        MorphemizerRegistry {
            morphemizers,
            by_name,
        }
    }

    /// The process-wide registry, built on first call.
    ///
    /// A construction failure is remembered and returned on every call.
    pub fn global() -> Result<&'static MorphemizerRegistry> {
        GLOBAL_REGISTRY
            .as_ref()
            .map_err(|e| MorphemizerError::registry(e.clone()))
    }

    /// All registered morphemizers in registration order.
    pub fn list_all(&self) -> &[Arc<CachedMorphemizer>] {
        &self.morphemizers
    }

    /// Look up a morphemizer by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<CachedMorphemizer>> {
        self.by_name
            .get(name)
            .map(|&index| Arc::clone(&self.morphemizers[index]))
    }

    /// Names of the registered morphemizers, in order.
    pub fn names(&self) -> Vec<&str> {
        self.morphemizers.iter().map(|m| m.name()).collect()
    }

    /// Name and description of every morphemizer, in order.
    pub fn descriptors(&self) -> Vec<MorphemizerInfo> {
        self.morphemizers
            .iter()
            .map(|m| MorphemizerInfo {
                name: m.name().to_string(),
                description: m.description(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.morphemizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphemizers.is_empty()
    }
}

impl std::fmt::Debug for MorphemizerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphemizerRegistry")
            .field("morphemizers", &self.names())
            .finish()
    }
}

/// All morphemizers of the global registry.
pub fn list_morphemizers() -> Result<&'static [Arc<CachedMorphemizer>]> {
    Ok(MorphemizerRegistry::global()?.list_all())
}

/// Look up a morphemizer of the global registry by name.
///
/// Returns `Ok(None)` for unknown names.
pub fn get_morphemizer(name: &str) -> Result<Option<Arc<CachedMorphemizer>>> {
    Ok(MorphemizerRegistry::global()?.get_by_name(name))
}
