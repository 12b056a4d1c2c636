//! Memoization of segmentation results.
//!
//! Segmentation is a pure function of the expression for a given
//! morphemizer, so results are kept in a bounded least-recently-used cache.
//! Every [`CachedMorphemizer`] owns its own [`MorphemeCache`]; two
//! morphemizers never share entries even for identical expressions.
//!
//! Caching only affects latency: a disabled cache (capacity zero) returns the
//! same results.
//!
//! # Examples
//!
//! ```
//! use morphemizer::analysis::cache::CachedMorphemizer;
//! use morphemizer::analysis::morphemizer::SpaceMorphemizer;
//!
//! let morphemizer = CachedMorphemizer::new(Box::new(SpaceMorphemizer::new()), 1024);
//!
//! let first = morphemizer.segment("Hello world");
//! let second = morphemizer.segment("Hello world");
//!
//! assert_eq!(first, second);
//! assert_eq!(morphemizer.cache().stats().hits, 1);
//! ```

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};
use lru::LruCache;
use parking_lot::Mutex;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::morphemizer::Morphemizer;
use crate::error::Result;
use crate::morpheme::Morpheme;

/// Default number of cached expressions per morphemizer.
pub const DEFAULT_CACHE_CAPACITY: usize = 131_072;

/// Shared, immutable segmentation result.
pub type Morphemes = Arc<Vec<Morpheme>>;

/// Hit and miss counters of a cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Bounded LRU cache from expression to morphemes.
///
/// One mutex guards the LRU list, so concurrent lookups and inserts keep the
/// ordering and the capacity bound intact. The lock is never held while a
/// result is being computed.
pub struct MorphemeCache {
    entries: Option<Mutex<LruCache<String, Morphemes>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MorphemeCache {
    /// Create a cache holding up to `capacity` expressions; zero disables it.
    pub fn new(capacity: usize) -> Self {
        MorphemeCache {
            entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create a cache that stores nothing.
    pub fn disabled() -> Self {
        Self::new(0)
    }

    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    pub fn capacity(&self) -> usize {
        self.entries
            .as_ref()
            .map_or(0, |entries| entries.lock().cap().get())
    }

    pub fn len(&self) -> usize {
        self.entries
            .as_ref()
            .map_or(0, |entries| entries.lock().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up `expression`, marking it as most recently used.
    pub fn get(&self, expression: &str) -> Option<Morphemes> {
        let found = self
            .entries
            .as_ref()
            .and_then(|entries| entries.lock().get(expression).cloned());

        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    /// Return the cached result for `expression`, computing and storing it on
    /// a miss. Errors from `compute` are returned and not cached.
    pub fn get_or_try_insert_with<F>(&self, expression: &str, compute: F) -> Result<Morphemes>
    where
        F: FnOnce() -> Result<Vec<Morpheme>>,
    {
        if let Some(morphemes) = self.get(expression) {
            return Ok(morphemes);
        }

        let morphemes = Arc::new(compute()?);

        if let Some(entries) = &self.entries {
            let mut entries = entries.lock();
            // Another thread may have stored the same expression meanwhile.
            if let Some(existing) = entries.get(expression) {
                return Ok(Arc::clone(existing));
            }
            entries.put(expression.to_string(), Arc::clone(&morphemes));
        }

        Ok(morphemes)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
            capacity: self.capacity(),
        }
    }
}

impl std::fmt::Debug for MorphemeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphemeCache")
            .field("stats", &self.stats())
            .finish()
    }
}

/// A registered morphemizer together with its result cache.
///
/// This is the handle callers get from the registry.
pub struct CachedMorphemizer {
    inner: Box<dyn Morphemizer>,
    cache: MorphemeCache,
}

impl CachedMorphemizer {
    /// Wrap `inner` with a cache of `capacity` expressions (zero disables it).
    pub fn new(inner: Box<dyn Morphemizer>, capacity: usize) -> Self {
        CachedMorphemizer {
            inner,
            cache: MorphemeCache::new(capacity),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn description(&self) -> String {
        self.inner.description()
    }

    /// Segment `expression`, propagating collaborator failures.
    pub fn try_segment(&self, expression: &str) -> Result<Morphemes> {
        self.cache.get_or_try_insert_with(expression, || {
            debug!("{}: segmenting uncached expression", self.inner.name());
            self.inner.morphemes(expression)
        })
    }

    /// Segment `expression`.
    ///
    /// A failing collaborator is logged and yields an empty result, which is
    /// not cached so a later call can still succeed.
    pub fn segment(&self, expression: &str) -> Morphemes {
        self.try_segment(expression).unwrap_or_else(|e| {
            warn!("{}: segmentation failed: {e}", self.inner.name());
            Arc::new(Vec::new())
        })
    }

    /// Segment many expressions in parallel, preserving their order.
    pub fn segment_batch<S>(&self, expressions: &[S]) -> Vec<Morphemes>
    where
        S: AsRef<str> + Sync,
    {
        expressions
            .par_iter()
            .map(|expression| self.segment(expression.as_ref()))
            .collect()
    }

    pub fn cache(&self) -> &MorphemeCache {
        &self.cache
    }

    /// The wrapped morphemizer, e.g. for downcasting through `as_any`.
    pub fn inner(&self) -> &dyn Morphemizer {
        self.inner.as_ref()
    }
}

impl std::fmt::Debug for CachedMorphemizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedMorphemizer")
            .field("name", &self.name())
            .field("cache", &self.cache)
            .finish()
    }
}
