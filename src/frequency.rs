//! Morpheme type frequencies over a body of text.
//!
//! Morphemes are grouped by [`MorphemeKey`], so `runs` and `ran` stemmed to
//! `run` count as one vocabulary item while every inflected spelling is kept
//! for display.

use std::collections::BTreeSet;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::morpheme::{Morpheme, MorphemeKey};

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub norm: String,
    pub base: String,
    pub pos: String,
    pub count: u64,
    /// Distinct inflected forms, sorted.
    pub inflections: Vec<String>,
}

#[derive(Debug, Default)]
struct Tally {
    count: u64,
    inflections: BTreeSet<String>,
}

/// Accumulates morpheme type counts.
#[derive(Debug, Default)]
pub struct MorphemeFrequency {
    tallies: AHashMap<MorphemeKey, Tally>,
    total: u64,
}

impl MorphemeFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `morpheme`.
    pub fn add(&mut self, morpheme: &Morpheme) {
        let tally = self.tallies.entry(morpheme.key()).or_default();
        tally.count += 1;
        if !tally.inflections.contains(morpheme.inflected()) {
            tally.inflections.insert(morpheme.inflected().to_string());
        }
        self.total += 1;
    }

    /// Count every morpheme of `morphemes`.
    pub fn extend<'a, I>(&mut self, morphemes: I)
    where
        I: IntoIterator<Item = &'a Morpheme>,
    {
        for morpheme in morphemes {
            self.add(morpheme);
        }
    }

    /// Occurrences of the morpheme type with `key`.
    pub fn count(&self, key: &MorphemeKey) -> u64 {
        self.tallies.get(key).map_or(0, |tally| tally.count)
    }

    /// Total morphemes counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct morpheme types.
    pub fn distinct(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Entries by descending count, ties broken by key.
    pub fn entries(&self) -> Vec<FrequencyEntry> {
        let mut sorted: Vec<(&MorphemeKey, &Tally)> = self.tallies.iter().collect();
        sorted.sort_by(|(a_key, a), (b_key, b)| b.count.cmp(&a.count).then_with(|| a_key.cmp(b_key)));

        sorted
            .into_iter()
            .map(|(key, tally)| FrequencyEntry {
                norm: key.norm.clone(),
                base: key.base.clone(),
                pos: key.pos.clone(),
                count: tally.count,
                inflections: tally.inflections.iter().cloned().collect(),
            })
            .collect()
    }

    /// The `n` most frequent entries.
    pub fn top(&self, n: usize) -> Vec<FrequencyEntry> {
        let mut entries = self.entries();
        entries.truncate(n);
        entries
    }
}
