//! Integration tests for the segmentation strategies with bundled data

use morphemizer::analysis::morphemizer::{JiebaMorphemizer, Morphemizer, SpaceMorphemizer};
use morphemizer::config::DictionaryProfile;
use morphemizer::frequency::MorphemeFrequency;
use morphemizer::morpheme::CJK_CHAR;
use morphemizer::prelude::*;
use tempfile::TempDir;

fn registry() -> Result<MorphemizerRegistry> {
    let config = MorphemizerConfig::default().with_cache_capacity(256);
    MorphemizerRegistry::build(&config)
}

fn norms(morphemes: &[Morpheme]) -> Vec<&str> {
    morphemes.iter().map(|m| m.norm()).collect()
}

#[test]
fn test_russian_dictionary() -> Result<()> {
    let registry = registry()?;
    let russian = registry.get_by_name("RussianMorphemizer").unwrap();

    let morphemes = russian.try_segment("Коты в Москве читают книги")?;

    assert_eq!(
        norms(&morphemes),
        vec!["кот", "в", "Москва", "читают", "книга"]
    );
    assert_eq!(morphemes[2].inflected(), "Москве");
    assert_eq!(morphemes[3].inflected(), "читают");
    assert!(morphemes.iter().all(|m| m.pos() == UNKNOWN));
    Ok(())
}

#[test]
fn test_basque_dictionary() -> Result<()> {
    let registry = registry()?;
    let basque = registry.get_by_name("BasqueMorphemizer").unwrap();

    let morphemes = basque.try_segment("Bilboko etxea, mendira!")?;

    assert_eq!(norms(&morphemes), vec!["Bilbo", "etxe", "mendi"]);
    assert_eq!(morphemes[0].inflected(), "Bilboko");
    assert_eq!(morphemes[1].inflected(), "etxea");
    Ok(())
}

#[test]
fn test_dictionary_from_custom_directory() -> Result<()> {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("de_DE.aff"),
        "SET UTF-8\nSFX N Y 2\nSFX N 0 n .\nSFX N 0 en .\n",
    )?;
    std::fs::write(dir.path().join("de_DE.dic"), "2\nHund/N\nKatze/N\n")?;

    let config = MorphemizerConfig::default()
        .with_dictionary_dir(dir.path())
        .with_dictionaries(vec![DictionaryProfile::new(
            "GermanMorphemizer",
            "de_DE",
            "German Hunspell",
        )]);
    let registry = MorphemizerRegistry::build(&config)?;

    assert_eq!(registry.len(), 5);
    let german = registry.get_by_name("GermanMorphemizer").unwrap();
    assert_eq!(german.description(), "German Hunspell");

    let morphemes = german.segment("Katzen und Hunden");
    assert_eq!(norms(&morphemes), vec!["Katze", "und", "Hund"]);
    Ok(())
}

#[test]
fn test_cjk_characters() -> Result<()> {
    let registry = registry()?;
    let cjk = registry.get_by_name("CjkCharMorphemizer").unwrap();

    let morphemes = cjk.segment("漢字とカナ, 한국어 and 中文");

    assert_eq!(norms(&morphemes), vec!["漢", "字", "中", "文"]);
    assert!(morphemes.iter().all(|m| m.pos() == CJK_CHAR));
    assert!(morphemes.iter().all(|m| m.sub_pos() == UNKNOWN));
    Ok(())
}

#[test]
fn test_jieba_segments_chinese_only() -> Result<()> {
    let jieba = JiebaMorphemizer::new(true);

    let morphemes = jieba.morphemes("我来到北京清华大学 (Tsinghua)。")?;
    let joined: String = morphemes.iter().map(|m| m.inflected()).collect();

    assert_eq!(joined, "我来到北京清华大学");
    assert!(morphemes.len() > 1);
    for morpheme in &morphemes {
        assert_eq!(morpheme.norm(), morpheme.inflected());
        assert_eq!(morpheme.sub_pos(), UNKNOWN);
        assert!(!morpheme.pos().is_empty());
    }

    assert!(jieba.morphemes("no chinese here")?.is_empty());
    Ok(())
}

#[test]
fn test_mecab_without_installation_degrades() -> Result<()> {
    let config = MorphemizerConfig::default().with_mecab(morphemizer::config::MecabConfig {
        command: "definitely-not-an-installed-mecab".to_string(),
        args: Vec::new(),
    });
    let registry = MorphemizerRegistry::build(&config)?;
    let mecab = registry.get_by_name("MecabMorphemizer").unwrap();

    assert_eq!(mecab.description(), "Japanese UNAVAILABLE");
    assert!(mecab.try_segment("日本語の文章").is_err());
    assert!(mecab.segment("日本語の文章").is_empty());
    assert!(mecab.cache().is_empty());
    Ok(())
}

#[test]
fn test_frequency_over_batch() {
    let morphemizer = CachedMorphemizer::new(Box::new(SpaceMorphemizer::new()), 16);
    let lines = ["the dog saw the cat", "The cat ran", "the end"];

    let mut frequency = MorphemeFrequency::new();
    for morphemes in morphemizer.segment_batch(&lines) {
        frequency.extend(morphemes.iter());
    }

    let top = frequency.top(2);
    assert_eq!(top[0].norm, "the");
    assert_eq!(top[0].count, 4);
    assert_eq!(top[1].norm, "cat");
    assert_eq!(top[1].count, 2);
    assert_eq!(frequency.total(), 10);
}
