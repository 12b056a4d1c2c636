//! The morpheme data model.
//!
//! A [`Morpheme`] is the unit every segmentation strategy produces: a
//! normalized lemma, its dictionary base form, the surface form found in the
//! text, a reading, and two part-of-speech tags. Strategies that cannot
//! provide a tag use the [`UNKNOWN`] sentinel.
//!
//! Downstream frequency analysis groups morphemes by [`MorphemeKey`]
//! (`norm`, `base`, `pos`), so two inflections of the same word count as the
//! same morpheme type.
//!
//! # Examples
//!
//! ```
//! use morphemizer::morpheme::{Morpheme, UNKNOWN};
//!
//! let ran = Morpheme::new("run", "run", "ran", "run", UNKNOWN, UNKNOWN);
//! let runs = Morpheme::new("run", "run", "runs", "run", UNKNOWN, UNKNOWN);
//!
//! assert_ne!(ran, runs);
//! assert_eq!(ran.key(), runs.key());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel for tags and forms a strategy cannot provide.
pub const UNKNOWN: &str = "UNKNOWN";

/// Part-of-speech tag of single logographic characters.
pub const CJK_CHAR: &str = "CJK_CHAR";

/// One segmented unit of text.
///
/// Morphemes are only built by segmentation strategies and never change
/// afterwards, so the fields are private and exposed through accessors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Morpheme {
    norm: String,
    base: String,
    inflected: String,
    read: String,
    pos: String,
    sub_pos: String,
}

/// Identity of a morpheme type: equal keys mean the same vocabulary item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MorphemeKey {
    pub norm: String,
    pub base: String,
    pub pos: String,
}

impl Morpheme {
    /// Column names of [`Morpheme::to_tsv_row`].
    pub const TSV_HEADER: &'static str = "norm\tbase\tinflected\treading\tpos\tsubpos";

    /// Create a morpheme from its six fields.
    ///
    /// Empty fields are replaced with [`UNKNOWN`] so that every field of a
    /// morpheme is non-empty.
    pub fn new<N, B, I, R, P, S>(norm: N, base: B, inflected: I, read: R, pos: P, sub_pos: S) -> Self
    where
        N: Into<String>,
        B: Into<String>,
        I: Into<String>,
        R: Into<String>,
        P: Into<String>,
        S: Into<String>,
    {
        Morpheme {
            norm: non_empty(norm.into()),
            base: non_empty(base.into()),
            inflected: non_empty(inflected.into()),
            read: non_empty(read.into()),
            pos: non_empty(pos.into()),
            sub_pos: non_empty(sub_pos.into()),
        }
    }

    /// Create a morpheme whose four form fields are all `form`.
    pub fn uniform<F, P, S>(form: F, pos: P, sub_pos: S) -> Self
    where
        F: Into<String>,
        P: Into<String>,
        S: Into<String>,
    {
        let form = form.into();
        Morpheme::new(form.clone(), form.clone(), form.clone(), form, pos, sub_pos)
    }

    pub fn norm(&self) -> &str {
        &self.norm
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Surface form as it appeared in the source text.
    pub fn inflected(&self) -> &str {
        &self.inflected
    }

    pub fn read(&self) -> &str {
        &self.read
    }

    pub fn pos(&self) -> &str {
        &self.pos
    }

    pub fn sub_pos(&self) -> &str {
        &self.sub_pos
    }

    /// The morpheme type key used for deduplication and frequency counting.
    pub fn key(&self) -> MorphemeKey {
        MorphemeKey {
            norm: self.norm.clone(),
            base: self.base.clone(),
            pos: self.pos.clone(),
        }
    }

    /// Whether `other` is the same morpheme type, ignoring the surface form.
    pub fn same_type(&self, other: &Morpheme) -> bool {
        self.norm == other.norm && self.base == other.base && self.pos == other.pos
    }

    /// A copy of this morpheme with the surface form replaced by the base form.
    pub fn deinflected(&self) -> Morpheme {
        Morpheme {
            inflected: self.base.clone(),
            ..self.clone()
        }
    }

    /// Tab-separated row in [`Morpheme::TSV_HEADER`] column order.
    pub fn to_tsv_row(&self) -> String {
        [
            self.norm.as_str(),
            &self.base,
            &self.inflected,
            &self.read,
            &self.pos,
            &self.sub_pos,
        ]
        .join("\t")
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tsv_row())
    }
}

impl fmt::Display for MorphemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.norm, self.base, self.pos)
    }
}

fn non_empty(value: String) -> String {
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value
    }
}
