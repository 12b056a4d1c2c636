//! Configuration for building the morphemizer registry.
//!
//! Configuration is plain JSON deserialized with serde; every field has a
//! default so a file only needs to list what it overrides:
//!
//! ```json
//! {
//!   "dictionary_dir": "/usr/share/hunspell",
//!   "cache_capacity": 4096,
//!   "mecab": { "command": "/opt/mecab/bin/mecab", "args": ["-d", "/opt/mecab/dic/ipadic"] }
//! }
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::cache::DEFAULT_CACHE_CAPACITY;
use crate::error::{MorphemizerError, Result};

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "MORPHEMIZER_CONFIG";

/// Environment variable overriding the dictionary directory.
pub const DICT_DIR_ENV: &str = "MORPHEMIZER_DICT_DIR";

/// Configuration of the registered morphemizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphemizerConfig {
    /// Directory holding the `<code>.aff`/`<code>.dic` dictionary pairs.
    ///
    /// Languages with a dictionary compiled into the crate use that copy
    /// when their pair is absent here.
    pub dictionary_dir: PathBuf,

    /// Dictionary languages to register, in registry order.
    pub dictionaries: Vec<DictionaryProfile>,

    /// Cached expressions per morphemizer. Zero disables caching.
    pub cache_capacity: usize,

    /// Chinese segmenter settings.
    pub jieba: JiebaConfig,

    /// Japanese analyzer settings.
    pub mecab: MecabConfig,
}

impl Default for MorphemizerConfig {
    fn default() -> Self {
        Self {
            dictionary_dir: PathBuf::from("resources/hunspell"),
            dictionaries: vec![
                DictionaryProfile::new("RussianMorphemizer", "ru_RU", "Russian Hunspell"),
                DictionaryProfile::new("BasqueMorphemizer", "eu_ES", "Basque Hunspell"),
            ],
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            jieba: JiebaConfig::default(),
            mecab: MecabConfig::default(),
        }
    }
}

impl MorphemizerConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MorphemizerError::config(format!(
                "Failed to read configuration file '{}': {e}",
                path.display()
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            MorphemizerError::config(format!(
                "Failed to parse configuration JSON from '{}': {e}",
                path.display()
            ))
        })
    }

    /// Build the configuration from the process environment.
    ///
    /// Reads the file named by `MORPHEMIZER_CONFIG` if set, then applies
    /// `MORPHEMIZER_DICT_DIR`.
    pub fn from_env() -> Result<Self> {
        let mut config = match env::var_os(CONFIG_ENV) {
            Some(path) => {
                debug!("Loading configuration from {}", PathBuf::from(&path).display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        if let Some(dir) = env::var_os(DICT_DIR_ENV) {
            config.dictionary_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Set the dictionary directory.
    pub fn with_dictionary_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.dictionary_dir = dir.into();
        self
    }

    /// Set the per-morphemizer cache capacity.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the dictionary languages.
    pub fn with_dictionaries(mut self, dictionaries: Vec<DictionaryProfile>) -> Self {
        self.dictionaries = dictionaries;
        self
    }

    /// Set the Japanese analyzer settings.
    pub fn with_mecab(mut self, mecab: MecabConfig) -> Self {
        self.mecab = mecab;
        self
    }
}

/// One language served by a dictionary morphemizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryProfile {
    /// Registry name, e.g. `RussianMorphemizer`.
    pub name: String,

    /// Dictionary file stem, e.g. `ru_RU`.
    pub code: String,

    /// One line description shown to users.
    pub description: String,
}

impl DictionaryProfile {
    pub fn new<N, C, D>(name: N, code: C, description: D) -> Self
    where
        N: Into<String>,
        C: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            code: code.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JiebaConfig {
    /// Recognize words missing from the dictionary with the HMM model.
    pub hmm: bool,
}

impl Default for JiebaConfig {
    fn default() -> Self {
        Self { hmm: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MecabConfig {
    /// Executable to run.
    pub command: String,

    /// Extra arguments, e.g. `-d <dictionary dir>`.
    pub args: Vec<String>,
}

impl Default for MecabConfig {
    fn default() -> Self {
        Self {
            command: "mecab".to_string(),
            args: Vec::new(),
        }
    }
}
