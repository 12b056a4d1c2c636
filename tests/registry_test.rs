//! Integration tests for the process-wide morphemizer registry

use std::sync::Arc;
use std::thread;

use morphemizer::prelude::*;

const REGISTERED: [&str; 6] = [
    "SpaceMorphemizer",
    "RussianMorphemizer",
    "BasqueMorphemizer",
    "MecabMorphemizer",
    "JiebaMorphemizer",
    "CjkCharMorphemizer",
];

#[test]
fn test_list_is_fixed_and_ordered() -> Result<()> {
    let first: Vec<&str> = list_morphemizers()?.iter().map(|m| m.name()).collect();
    let second: Vec<&str> = list_morphemizers()?.iter().map(|m| m.name()).collect();

    assert_eq!(first, REGISTERED);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_lookup_by_name() -> Result<()> {
    for name in REGISTERED {
        let morphemizer = get_morphemizer(name)?.expect("registered morphemizer");
        assert_eq!(morphemizer.name(), name);
    }

    assert!(get_morphemizer("nonexistent")?.is_none());
    assert!(get_morphemizer("spacemorphemizer")?.is_none());
    Ok(())
}

#[test]
fn test_global_registry_is_shared() -> Result<()> {
    let a = get_morphemizer("SpaceMorphemizer")?.unwrap();
    let b = MorphemizerRegistry::global()?
        .get_by_name("SpaceMorphemizer")
        .unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    Ok(())
}

#[test]
fn test_descriptions_never_fail() -> Result<()> {
    let descriptions: Vec<String> = list_morphemizers()?
        .iter()
        .map(|m| m.description())
        .collect();

    assert_eq!(descriptions[0], "Language w/ Spaces");
    assert_eq!(descriptions[1], "Russian Hunspell");
    assert_eq!(descriptions[2], "Basque Hunspell");
    assert!(descriptions[3].starts_with("Japanese "));
    assert_eq!(descriptions[4], "Chinese");
    assert_eq!(descriptions[5], "CJK Characters");
    Ok(())
}

#[test]
fn test_concurrent_first_access() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let name = REGISTERED[i % REGISTERED.len()];
                get_morphemizer(name).unwrap().unwrap().name().to_string()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), REGISTERED[i % REGISTERED.len()]);
    }
}

#[test]
fn test_cache_is_per_morphemizer() -> Result<()> {
    let space = get_morphemizer("SpaceMorphemizer")?.unwrap();
    let cjk = get_morphemizer("CjkCharMorphemizer")?.unwrap();

    let by_space = space.segment("日本語");
    let by_cjk = cjk.segment("日本語");

    assert_eq!(by_space.len(), 1);
    assert_eq!(by_cjk.len(), 3);
    assert_eq!(space.segment("日本語"), by_space);
    assert_eq!(cjk.segment("日本語"), by_cjk);
    Ok(())
}
