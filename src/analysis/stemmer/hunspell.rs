//! Affix dictionary stemmer reading the Hunspell `.aff`/`.dic` format.
//!
//! Supports the subset of the format needed for stemming: `SET UTF-8`,
//! `FLAG` (single character, `long`, `num`, `UTF-8`), `AF` flag aliases,
//! `NEEDAFFIX`, and `PFX`/`SFX` rules with strip, append and condition
//! fields, including prefix+suffix cross products and two-level suffixes
//! through continuation classes. Compounding and morphological fields are
//! ignored. `COMPLEXPREFIXES` and `IGNORE` change how words are built, so
//! dictionaries using them are rejected.
//!
//! # Examples
//!
//! ```
//! use morphemizer::analysis::stemmer::{DictionaryStemmer, HunspellDictionary};
//!
//! let aff = "SET UTF-8\nSFX S Y 1\nSFX S 0 s .\n";
//! let dic = "2\ncat/S\ndog/S\n";
//! let dictionary = HunspellDictionary::parse("en_TEST", aff, dic).unwrap();
//!
//! assert_eq!(dictionary.stem("cats"), vec![b"cat".to_vec()]);
//! assert!(dictionary.stem("birds").is_empty());
//! ```

use std::fs;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::info;

use super::DictionaryStemmer;
use crate::error::{MorphemizerError, Result};

/// Dictionaries compiled into the crate as `(code, aff, dic)`.
const BUNDLED: &[(&str, &str, &str)] = &[
    (
        "ru_RU",
        include_str!("../../../resources/hunspell/ru_RU.aff"),
        include_str!("../../../resources/hunspell/ru_RU.dic"),
    ),
    (
        "eu_ES",
        include_str!("../../../resources/hunspell/eu_ES.aff"),
        include_str!("../../../resources/hunspell/eu_ES.dic"),
    ),
];

/// How flags are written in the dictionary and affix files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum FlagMode {
    /// One character per flag (the default).
    #[default]
    Single,
    /// Two characters per flag.
    Long,
    /// Comma separated decimal numbers.
    Numeric,
    /// One Unicode character per flag.
    Utf8,
}

impl FlagMode {
    fn from_directive(value: &str) -> Result<Self> {
        match value {
            "long" => Ok(FlagMode::Long),
            "num" => Ok(FlagMode::Numeric),
            "UTF-8" => Ok(FlagMode::Utf8),
            other => Err(MorphemizerError::dictionary(format!(
                "Unsupported FLAG type '{other}'"
            ))),
        }
    }

    fn split(self, raw: &str) -> Vec<String> {
        match self {
            FlagMode::Single | FlagMode::Utf8 => raw.chars().map(String::from).collect(),
            FlagMode::Long => {
                let chars: Vec<char> = raw.chars().collect();
                chars.chunks(2).map(|pair| pair.iter().collect()).collect()
            }
            FlagMode::Numeric => raw
                .split(',')
                .map(str::trim)
                .filter(|flag| !flag.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

/// Flag syntax of one dictionary: the `FLAG` mode and any `AF` aliases.
#[derive(Clone, Debug, Default)]
struct FlagFormat {
    mode: FlagMode,
    /// Flag strings declared by `AF`, referenced by 1-based index.
    aliases: Vec<String>,
}

impl FlagFormat {
    /// Split a flag field, resolving it as an alias number when `AF` is in use.
    ///
    /// Returns `None` for an alias that was never declared.
    fn resolve(&self, raw: &str) -> Option<Vec<String>> {
        if self.aliases.is_empty() || raw.is_empty() {
            return Some(self.mode.split(raw));
        }
        let index = raw.trim().parse::<usize>().ok()?.checked_sub(1)?;
        self.aliases.get(index).map(|flags| self.mode.split(flags))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ConditionUnit {
    Any,
    Char(char),
    Class { negated: bool, chars: Vec<char> },
}

impl ConditionUnit {
    fn matches(&self, c: char) -> bool {
        match self {
            ConditionUnit::Any => true,
            ConditionUnit::Char(expected) => *expected == c,
            ConditionUnit::Class { negated, chars } => chars.contains(&c) != *negated,
        }
    }
}

/// Character pattern an affix rule requires at the end (suffix) or start
/// (prefix) of the stem.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Condition(Vec<ConditionUnit>);

impl Condition {
    fn parse(pattern: &str) -> Result<Self> {
        let mut units = Vec::new();
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            match c {
                '.' => units.push(ConditionUnit::Any),
                '[' => {
                    let mut class = Vec::new();
                    let mut negated = false;
                    let mut closed = false;
                    for (i, c) in chars.by_ref().enumerate() {
                        match c {
                            '^' if i == 0 => negated = true,
                            ']' => {
                                closed = true;
                                break;
                            }
                            c => class.push(c),
                        }
                    }
                    if !closed {
                        return Err(MorphemizerError::dictionary(format!(
                            "Unterminated character class in condition '{pattern}'"
                        )));
                    }
                    units.push(ConditionUnit::Class {
                        negated,
                        chars: class,
                    });
                }
                c => units.push(ConditionUnit::Char(c)),
            }
        }

        Ok(Condition(units))
    }

    fn matches_end(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        chars.len() >= self.0.len()
            && chars[chars.len() - self.0.len()..]
                .iter()
                .zip(&self.0)
                .all(|(c, unit)| unit.matches(*c))
    }

    fn matches_start(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        chars.len() >= self.0.len() && chars.iter().zip(&self.0).all(|(c, unit)| unit.matches(*c))
    }
}

/// One `PFX` or `SFX` rule line.
#[derive(Clone, Debug)]
struct AffixRule {
    flag: String,
    cross_product: bool,
    strip: String,
    append: String,
    /// Flags of affixes allowed on top of this one.
    continuation: Vec<String>,
    condition: Condition,
}

impl AffixRule {
    /// Undo this suffix rule on `word`, returning the candidate stem.
    fn unapply_suffix(&self, word: &str) -> Option<String> {
        let rest = word.strip_suffix(self.append.as_str())?;
        if rest.is_empty() || (self.append.is_empty() && self.strip.is_empty()) {
            return None;
        }
        let stem = format!("{rest}{}", self.strip);
        self.condition.matches_end(&stem).then_some(stem)
    }

    /// Undo this prefix rule on `word`, returning the candidate stem.
    fn unapply_prefix(&self, word: &str) -> Option<String> {
        let rest = word.strip_prefix(self.append.as_str())?;
        if rest.is_empty() || (self.append.is_empty() && self.strip.is_empty()) {
            return None;
        }
        let stem = format!("{}{rest}", self.strip);
        self.condition.matches_start(&stem).then_some(stem)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum AffixKind {
    Prefix,
    Suffix,
}

/// A Hunspell dictionary loaded into memory.
///
/// Immutable after loading, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct HunspellDictionary {
    code: String,
    words: AHashMap<String, Vec<AHashSet<String>>>,
    prefixes: Vec<AffixRule>,
    suffixes: Vec<AffixRule>,
    need_affix: Option<String>,
}

impl HunspellDictionary {
    /// Load `<code>.aff` and `<code>.dic` from `dir`.
    ///
    /// When neither file exists and `code` names a dictionary compiled into
    /// the crate, the compiled copy is used instead.
    pub fn open<P: AsRef<Path>>(dir: P, code: &str) -> Result<Self> {
        let dir = dir.as_ref();
        let aff_path = dir.join(format!("{code}.aff"));
        let dic_path = dir.join(format!("{code}.dic"));

        if !aff_path.exists() && !dic_path.exists() {
            if let Some(dictionary) = Self::bundled(code) {
                info!(
                    "No {} dictionary in {}, using the bundled copy",
                    code,
                    dir.display()
                );
                return dictionary;
            }
        }

        let aff = read_utf8(&aff_path)?;
        let dic = read_utf8(&dic_path)?;

        let dictionary = Self::parse(code, &aff, &dic)?;
        info!(
            "Loaded hunspell dictionary {} from {} ({} words, {} prefix rules, {} suffix rules)",
            code,
            dir.display(),
            dictionary.words.len(),
            dictionary.prefixes.len(),
            dictionary.suffixes.len()
        );

        Ok(dictionary)
    }

    /// The dictionary for `code` compiled into the crate, if there is one.
    pub fn bundled(code: &str) -> Option<Result<Self>> {
        BUNDLED
            .iter()
            .find(|(bundled, _, _)| *bundled == code)
            .map(|(_, aff, dic)| Self::parse(code, aff, dic))
    }

    /// Build a dictionary from the contents of an affix and a dictionary file.
    pub fn parse(code: &str, aff: &str, dic: &str) -> Result<Self> {
        let mut dictionary = HunspellDictionary {
            code: code.to_string(),
            words: AHashMap::new(),
            prefixes: Vec::new(),
            suffixes: Vec::new(),
            need_affix: None,
        };

        let format = dictionary.parse_affixes(aff)?;
        dictionary.parse_words(dic, &format)?;

        Ok(dictionary)
    }

    fn parse_affixes(&mut self, aff: &str) -> Result<FlagFormat> {
        let mut format = FlagFormat::default();
        // Alias lines still expected after the `AF` count line.
        let mut aliases_remaining: Option<usize> = None;
        // Rule lines still expected after each PFX/SFX header, with its cross product setting.
        let mut pending: AHashMap<(AffixKind, String), (usize, bool)> = AHashMap::new();

        for (line_no, line) in aff.lines().enumerate() {
            let line = line.trim_start_matches('\u{feff}').trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let malformed = || {
                MorphemizerError::dictionary(format!(
                    "{}.aff line {}: malformed directive '{}'",
                    self.code,
                    line_no + 1,
                    line
                ))
            };

            match fields[0] {
                "SET" => {
                    let encoding = fields.get(1).ok_or_else(malformed)?;
                    if !encoding.eq_ignore_ascii_case("UTF-8") {
                        return Err(MorphemizerError::dictionary(format!(
                            "{}.aff uses unsupported encoding {encoding}; convert it to UTF-8",
                            self.code
                        )));
                    }
                }
                "FLAG" => {
                    format.mode = FlagMode::from_directive(fields.get(1).ok_or_else(malformed)?)?;
                }
                "AF" => {
                    let value = fields.get(1).ok_or_else(malformed)?;
                    match aliases_remaining {
                        None => {
                            aliases_remaining = Some(value.parse().map_err(|_| malformed())?);
                        }
                        Some(0) => return Err(malformed()),
                        Some(remaining) => {
                            aliases_remaining = Some(remaining - 1);
                            format.aliases.push(value.to_string());
                        }
                    }
                }
                "COMPLEXPREFIXES" | "IGNORE" => {
                    return Err(MorphemizerError::dictionary(format!(
                        "{}.aff uses unsupported directive {}",
                        self.code, fields[0]
                    )));
                }
                "NEEDAFFIX" => {
                    self.need_affix = Some(fields.get(1).ok_or_else(malformed)?.to_string());
                }
                "PFX" | "SFX" => {
                    let kind = if fields[0] == "PFX" {
                        AffixKind::Prefix
                    } else {
                        AffixKind::Suffix
                    };
                    let flag = fields.get(1).ok_or_else(malformed)?.to_string();
                    let key = (kind, flag.clone());

                    match pending.get_mut(&key) {
                        Some((remaining, cross_product)) if *remaining > 0 => {
                            *remaining -= 1;
                            let field = fields.get(3).ok_or_else(malformed)?;
                            let (append, continuation) = match field.split_once('/') {
                                Some((append, classes)) => {
                                    (append, format.resolve(classes).ok_or_else(malformed)?)
                                }
                                None => (*field, Vec::new()),
                            };
                            let rule = AffixRule {
                                flag,
                                cross_product: *cross_product,
                                strip: affix_text(fields.get(2).ok_or_else(malformed)?),
                                append: affix_text(append),
                                continuation,
                                condition: Condition::parse(fields.get(4).copied().unwrap_or("."))?,
                            };
                            match kind {
                                AffixKind::Prefix => self.prefixes.push(rule),
                                AffixKind::Suffix => self.suffixes.push(rule),
                            }
                        }
                        _ => {
                            let cross_product = *fields.get(2).ok_or_else(malformed)? == "Y";
                            let count = fields
                                .get(3)
                                .and_then(|count| count.parse::<usize>().ok())
                                .ok_or_else(malformed)?;
                            pending.insert(key, (count, cross_product));
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(format)
    }

    fn parse_words(&mut self, dic: &str, format: &FlagFormat) -> Result<()> {
        let mut lines = dic
            .lines()
            .enumerate()
            .map(|(line_no, line)| (line_no, line.trim_start_matches('\u{feff}').trim_end()))
            .filter(|(_, line)| !line.is_empty())
            .peekable();

        // The first line holds the approximate word count.
        if lines
            .peek()
            .is_some_and(|(_, line)| line.trim().parse::<usize>().is_ok())
        {
            lines.next();
        }

        for (line_no, line) in lines {
            let entry = line.split(['\t', ' ']).next().unwrap_or_default();
            let (word, raw_flags) = split_entry(entry);
            if word.is_empty() {
                continue;
            }
            let flags: AHashSet<String> = format
                .resolve(&raw_flags)
                .ok_or_else(|| {
                    MorphemizerError::dictionary(format!(
                        "{}.dic line {}: unknown flag alias '{}'",
                        self.code,
                        line_no + 1,
                        raw_flags
                    ))
                })?
                .into_iter()
                .collect();
            self.words.entry(word).or_default().push(flags);
        }

        Ok(())
    }

    /// Language code of this dictionary, e.g. `ru_RU`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of distinct words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether `word` is listed as a word on its own.
    pub fn contains(&self, word: &str) -> bool {
        self.words.get(word).is_some_and(|homonyms| {
            homonyms.iter().any(|flags| {
                self.need_affix
                    .as_ref()
                    .is_none_or(|need_affix| !flags.contains(need_affix))
            })
        })
    }

    fn has_flags(&self, word: &str, required: &[&str]) -> bool {
        self.words.get(word).is_some_and(|homonyms| {
            homonyms
                .iter()
                .any(|flags| required.iter().all(|flag| flags.contains(*flag)))
        })
    }

    /// An affix continued by the `NEEDAFFIX` flag is only valid under another affix.
    fn is_standalone(&self, rule: &AffixRule) -> bool {
        self.need_affix
            .as_ref()
            .is_none_or(|need_affix| !rule.continuation.contains(need_affix))
    }

    fn candidate_stems(&self, word: &str) -> Vec<String> {
        let mut stems = Vec::new();

        if self.contains(word) {
            push_unique(&mut stems, word.to_string());
        }

        for suffix in &self.suffixes {
            let Some(stem) = suffix.unapply_suffix(word) else {
                continue;
            };
            if self.is_standalone(suffix) && self.has_flags(&stem, &[&suffix.flag]) {
                push_unique(&mut stems, stem.clone());
            }
            // Two-level suffixes: `suffix` sits on top of an inner suffix that lists it.
            for inner in &self.suffixes {
                if !inner.continuation.contains(&suffix.flag) {
                    continue;
                }
                if let Some(root) = inner.unapply_suffix(&stem) {
                    if self.has_flags(&root, &[&inner.flag]) {
                        push_unique(&mut stems, root);
                    }
                }
            }
            if suffix.cross_product {
                for prefix in self.prefixes.iter().filter(|prefix| prefix.cross_product) {
                    if let Some(root) = prefix.unapply_prefix(&stem) {
                        if self.has_flags(&root, &[&prefix.flag, &suffix.flag]) {
                            push_unique(&mut stems, root);
                        }
                    }
                }
            }
        }

        for prefix in &self.prefixes {
            if let Some(stem) = prefix.unapply_prefix(word) {
                if self.is_standalone(prefix) && self.has_flags(&stem, &[&prefix.flag]) {
                    push_unique(&mut stems, stem);
                }
            }
        }

        stems
    }
}

impl DictionaryStemmer for HunspellDictionary {
    fn stem(&self, word: &str) -> Vec<Vec<u8>> {
        self.candidate_stems(word)
            .into_iter()
            .map(String::into_bytes)
            .collect()
    }

    fn name(&self) -> &str {
        &self.code
    }
}

fn read_utf8(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        MorphemizerError::dictionary(format!("Failed to read '{}': {e}", path.display()))
    })?;
    String::from_utf8(bytes).map_err(|_| {
        MorphemizerError::dictionary(format!("'{}' is not valid UTF-8", path.display()))
    })
}

/// `0` stands for the empty string in affix rules.
fn affix_text(field: &str) -> String {
    if field == "0" {
        String::new()
    } else {
        field.to_string()
    }
}

/// Split a `.dic` entry into word and raw flags at the first unescaped `/`.
fn split_entry(entry: &str) -> (String, String) {
    let mut word = String::new();
    let mut chars = entry.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('/') => word.push('/'),
                Some(other) => {
                    word.push('\\');
                    word.push(other);
                }
                None => word.push('\\'),
            },
            '/' => return (word, chars.collect()),
            c => word.push(c),
        }
    }

    (word, String::new())
}

fn push_unique(stems: &mut Vec<String>, stem: String) {
    if !stems.contains(&stem) {
        stems.push(stem);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    use tempfile::TempDir;

    const AFF: &str = "\
SET UTF-8
TRY оаеи

SFX A Y 3
SFX A 0 а .
SFX A 0 у .
SFX A 0 ом .

SFX B Y 2
SFX B а и а
SFX B а у а

PFX P Y 1
PFX P 0 по .
";

    const DIC: &str = "\
5
стол/A
Дагестан/A
книга/B
кот/AP
мама
";

    fn dictionary() -> HunspellDictionary {
        HunspellDictionary::parse("ru_TEST", AFF, DIC).unwrap()
    }

    fn stems(dictionary: &HunspellDictionary, word: &str) -> Vec<String> {
        dictionary
            .stem(word)
            .into_iter()
            .map(|stem| String::from_utf8(stem).unwrap())
            .collect()
    }

    #[test]
    fn test_listed_word() {
        let dictionary = dictionary();
        assert_eq!(stems(&dictionary, "стол"), vec!["стол"]);
        assert_eq!(stems(&dictionary, "мама"), vec!["мама"]);
        assert_eq!(dictionary.len(), 5);
    }

    #[test]
    fn test_suffix_rules() {
        let dictionary = dictionary();
        assert_eq!(stems(&dictionary, "столом"), vec!["стол"]);
        assert_eq!(stems(&dictionary, "книги"), vec!["книга"]);
        assert_eq!(stems(&dictionary, "книгу"), vec!["книга"]);
        // "мама" carries no suffix flags.
        assert!(stems(&dictionary, "мамы").is_empty());
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let dictionary = dictionary();
        assert!(stems(&dictionary, "дагестана").is_empty());
        assert_eq!(stems(&dictionary, "Дагестана"), vec!["Дагестан"]);
    }

    #[test]
    fn test_prefix_and_cross_product() {
        let dictionary = dictionary();
        assert_eq!(stems(&dictionary, "покот"), vec!["кот"]);
        assert_eq!(stems(&dictionary, "покотом"), vec!["кот"]);
        // "стол" has no P flag.
        assert!(stems(&dictionary, "постолом").is_empty());
    }

    #[test]
    fn test_conditions() {
        let aff = "SFX D Y 2\nSFX D y ied [^aeiou]y\nSFX D 0 ed [^y]\n";
        let dic = "3\ncry/D\nplay/D\nwalk/D\n";
        let dictionary = HunspellDictionary::parse("en_TEST", aff, dic).unwrap();

        assert_eq!(stems(&dictionary, "cried"), vec!["cry"]);
        assert_eq!(stems(&dictionary, "walked"), vec!["walk"]);
        // "play" ends in a vowel + y, so only the plain -ed rule would apply and it excludes y.
        assert!(stems(&dictionary, "plaied").is_empty());
        assert!(stems(&dictionary, "played").is_empty());
    }

    #[test]
    fn test_long_and_numeric_flags() {
        let aff = "FLAG long\nSFX Aa Y 1\nSFX Aa 0 s .\n";
        let dictionary = HunspellDictionary::parse("xx", aff, "1\ncat/AaBb\n").unwrap();
        assert_eq!(stems(&dictionary, "cats"), vec!["cat"]);

        let aff = "FLAG num\nSFX 101 Y 1\nSFX 101 0 s .\n";
        let dictionary = HunspellDictionary::parse("xx", aff, "1\ndog/7,101\n").unwrap();
        assert_eq!(stems(&dictionary, "dogs"), vec!["dog"]);
    }

    #[test]
    fn test_need_affix() {
        let aff = "NEEDAFFIX X\nSFX S Y 1\nSFX S 0 s .\n";
        let dictionary = HunspellDictionary::parse("xx", aff, "1\nscissor/XS\n").unwrap();

        assert!(!dictionary.contains("scissor"));
        assert!(stems(&dictionary, "scissor").is_empty());
        assert_eq!(stems(&dictionary, "scissors"), vec!["scissor"]);
    }

    #[test]
    fn test_escaped_slash_and_morphology() {
        let dictionary =
            HunspellDictionary::parse("xx", "", "2\nand\\/or\nword/S po:noun\n").unwrap();

        assert!(dictionary.contains("and/or"));
        assert!(dictionary.contains("word"));
    }

    #[test]
    fn test_flag_aliases() {
        let aff = "SET UTF-8\nAF 1\nAF A # 1\nSFX A Y 1\nSFX A 0 s .\n";
        let dictionary = HunspellDictionary::parse("en_TEST", aff, "1\ncat/1\n").unwrap();

        assert_eq!(stems(&dictionary, "cats"), vec!["cat"]);
        assert_eq!(stems(&dictionary, "cat"), vec!["cat"]);
    }

    #[test]
    fn test_unknown_flag_alias() {
        let aff = "AF 1\nAF A\nSFX A Y 1\nSFX A 0 s .\n";
        let result = HunspellDictionary::parse("en_TEST", aff, "1\ncat/3\n");
        assert!(matches!(result, Err(MorphemizerError::Dictionary(_))));

        // More alias lines than announced.
        let result = HunspellDictionary::parse("en_TEST", "AF 1\nAF A\nAF B\n", "0\n");
        assert!(matches!(result, Err(MorphemizerError::Dictionary(_))));
    }

    #[test]
    fn test_continuation_classes() {
        let aff = "SFX A Y 1\nSFX A 0 er/B .\nSFX B Y 1\nSFX B 0 s .\n";
        let dictionary = HunspellDictionary::parse("en_TEST", aff, "1\nwork/A\n").unwrap();

        assert_eq!(stems(&dictionary, "worker"), vec!["work"]);
        assert_eq!(stems(&dictionary, "workers"), vec!["work"]);
        // "work" does not carry B itself.
        assert!(stems(&dictionary, "works").is_empty());
    }

    #[test]
    fn test_aliased_continuation_classes() {
        let aff = "AF 2\nAF A\nAF B\nSFX A Y 1\nSFX A 0 er/2 .\nSFX B Y 1\nSFX B 0 s .\n";
        let dictionary = HunspellDictionary::parse("en_TEST", aff, "1\nwork/1\n").unwrap();

        assert_eq!(stems(&dictionary, "workers"), vec!["work"]);
    }

    #[test]
    fn test_affix_needing_another_affix() {
        let aff = "NEEDAFFIX X\nSFX A Y 1\nSFX A 0 er/BX .\nSFX B Y 1\nSFX B 0 s .\n";
        let dictionary = HunspellDictionary::parse("en_TEST", aff, "1\nwork/A\n").unwrap();

        assert!(stems(&dictionary, "worker").is_empty());
        assert_eq!(stems(&dictionary, "workers"), vec!["work"]);
    }

    #[test]
    fn test_unsupported_directives() {
        for aff in ["COMPLEXPREFIXES\n", "IGNORE ie\n"] {
            let result = HunspellDictionary::parse("xx", aff, "0\n");
            assert!(matches!(result, Err(MorphemizerError::Dictionary(_))));
        }
    }

    #[test]
    fn test_unsupported_encoding() {
        let result = HunspellDictionary::parse("ru_RU", "SET KOI8-R\n", "0\n");
        assert!(matches!(result, Err(MorphemizerError::Dictionary(_))));
    }

    #[test]
    fn test_malformed_affix_header() {
        let result = HunspellDictionary::parse("xx", "SFX A Y many\n", "0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_open_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("ru_TEST.aff"))
            .unwrap()
            .write_all(AFF.as_bytes())
            .unwrap();
        File::create(temp_dir.path().join("ru_TEST.dic"))
            .unwrap()
            .write_all(DIC.as_bytes())
            .unwrap();

        let dictionary = HunspellDictionary::open(temp_dir.path(), "ru_TEST").unwrap();
        assert_eq!(dictionary.code(), "ru_TEST");
        assert_eq!(dictionary.name(), "ru_TEST");
        assert_eq!(stems(&dictionary, "кота"), vec!["кот"]);
    }

    #[test]
    fn test_open_missing_dictionary() {
        let temp_dir = TempDir::new().unwrap();
        let result = HunspellDictionary::open(temp_dir.path(), "xx_XX");
        assert!(matches!(result, Err(MorphemizerError::Dictionary(_))));
    }

    #[test]
    fn test_open_falls_back_to_bundled_copy() {
        let dictionary = HunspellDictionary::open("/nonexistent/hunspell", "ru_RU").unwrap();
        assert_eq!(dictionary.code(), "ru_RU");
        assert!(!dictionary.is_empty());

        let dictionary = HunspellDictionary::open("/nonexistent/hunspell", "eu_ES").unwrap();
        assert!(!dictionary.is_empty());

        assert!(HunspellDictionary::bundled("xx_XX").is_none());
    }

    #[test]
    fn test_partial_pair_is_not_replaced() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("ru_RU.aff"))
            .unwrap()
            .write_all(b"SET UTF-8\n")
            .unwrap();

        let result = HunspellDictionary::open(temp_dir.path(), "ru_RU");
        assert!(matches!(result, Err(MorphemizerError::Dictionary(_))));
    }
}
